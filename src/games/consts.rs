pub const ROUNDS_PER_GAME: u32 = 4;
pub const GAME_ID_LENGTH: usize = 10;
