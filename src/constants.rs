pub const ARENA_SIZE: u8 = 28;
pub const HALF_ARENA: u8 = 14;

/// Index of our own player in parsed unit data. The raw frame data uses 1 for us and 2 for the opponent.
pub const PLAYER_SELF: usize = 0;
pub const PLAYER_ENEMY: usize = 1;

/// Owner value used for our own units inside action frame events.
pub const FRAME_OWNER_SELF: u8 = 1;

/// Sentinel spawn count that means "as many as we can afford".
pub const SPAWN_ALL: u32 = 1000;

/// Engine `turnInfo[0]` phase values.
pub const TURN_PHASE_TURN: i64 = 0;
pub const TURN_PHASE_ACTION_FRAME: i64 = 1;
pub const TURN_PHASE_END: i64 = 2;

/// Spending resources, indexed the way the engine's cost arrays are.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Resource {
    Bits = 0,
    Cores = 1,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::Bits, Resource::Cores];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}
