use super::*;

/// The great wall: a V of encryptors funnelling enemy units into a
/// destructor-lined channel at the bottom centre of our half.
///
/// Destructors shield both corners of row 13 and anchor each arm of the V.
/// Encryptor arms run diagonally from the corners down to row 5, where
/// destructors line a channel. The columns x = 13 and x = 14 are left open
/// so our own units can still leave the base.
pub fn great_wall() -> Stamp {
    Stamp {
        name: "great_wall",
        placements: vec![
            // Corner shields
            line(UnitType::Destructor, [0, 13], [2, 13]),
            line(UnitType::Destructor, [25, 13], [27, 13]),
            // V of power: destructors on each arm first, then the encryptor arms
            pts(UnitType::Destructor, &[[5, 10], [8, 7]]),
            pts(UnitType::Destructor, &[[19, 7], [22, 10]]),
            line(UnitType::Encryptor, [2, 13], [10, 5]),
            line(UnitType::Encryptor, [17, 5], [25, 13]),
            // The channel
            pts(UnitType::Encryptor, &[[11, 5]]),
            pts(UnitType::Encryptor, &[[16, 5]]),
            pts(UnitType::Destructor, &[[12, 4], [12, 5], [15, 4], [15, 5]]),
        ],
    }
}

/// Second layer behind the channel, built once the wall is up.
pub fn wall_fortification() -> Stamp {
    Stamp {
        name: "wall_fortification",
        placements: vec![
            pts(UnitType::Destructor, &[[11, 4], [16, 4], [12, 2], [15, 2]]),
            pts(
                UnitType::Encryptor,
                &[[12, 1], [15, 1], [13, 0], [14, 0], [13, 1], [14, 1]],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHashSet;

    #[test]
    fn layouts_validate() {
        assert!(great_wall().validate());
        assert!(wall_fortification().validate());
    }

    #[test]
    fn wall_is_symmetric() {
        let wall = great_wall();
        let tiles: FnvHashSet<(UnitType, Location)> = wall.placements().into_iter().collect();
        let mirrored: FnvHashSet<(UnitType, Location)> = wall.mirrored().placements().into_iter().collect();
        assert_eq!(tiles, mirrored);
    }

    #[test]
    fn channel_stays_open() {
        let wall = great_wall();
        let occupied: FnvHashSet<Location> = wall
            .placements()
            .into_iter()
            .chain(wall_fortification().placements())
            .map(|(_, loc)| loc)
            .collect();

        for y in 3..=13 {
            assert!(!occupied.contains(&Location::from_xy(13, y)));
            assert!(!occupied.contains(&Location::from_xy(14, y)));
        }
    }
}
