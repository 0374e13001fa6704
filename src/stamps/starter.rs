use super::*;

/// Basic spread-out defence: destructors on the corners and centre, with
/// filters in front of the side destructors to soak damage for them.
pub fn starter_defences() -> Stamp {
    Stamp {
        name: "starter_defences",
        placements: vec![
            pts(
                UnitType::Destructor,
                &[[0, 13], [27, 13], [8, 11], [19, 11], [13, 11], [14, 11]],
            ),
            pts(UnitType::Filter, &[[8, 12], [19, 12]]),
        ],
    }
}

/// Encryptors behind the back spawn tiles to boost outgoing pings.
pub fn encryptor_boost() -> Stamp {
    Stamp {
        name: "encryptor_boost",
        placements: vec![pts(UnitType::Encryptor, &[[13, 2], [14, 2], [13, 3], [14, 3]])],
    }
}

/// A row of `unit_type` across y = 11, right to left, that stops our EMPs
/// short of the enemy base so they fire at its front rows from range.
pub fn emp_line(unit_type: UnitType) -> Stamp {
    let points: Vec<[u8; 2]> = (6..=27u8)
        .rev()
        .map(|x| [x, 11])
        .filter(|p| location_in_bounds(Location::from(*p)))
        .collect();
    Stamp {
        name: "emp_line",
        placements: vec![pts(unit_type, &points)],
    }
}
