pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 13;
pub const TOTAL_TRICKS: u8 = 13;
pub const TENS_IN_DECK: u8 = 4;

/// Cards dealt to each seat before trump is called. The caller picks the
/// hidden trump from this batch, and it is all anyone sees while calling.
pub const FIRST_BATCH: usize = 5;
/// Cards dealt to each seat after the first batch.
pub const SECOND_BATCH: usize = HAND_SIZE - FIRST_BATCH;
