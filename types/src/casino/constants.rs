/// Casino name used in greetings.
pub const CASINO_NAME: &str = "Quarks Casino";

/// Lowest face on a die.
pub const MIN_FACE: u8 = 1;

/// Highest face on a die (a standard six-sided die).
pub const DIE_FACES: u8 = 6;

/// Dice thrown per craps round.
pub const CRAPS_DICE: usize = 2;

/// Dice thrown per threshold round.
pub const THRESHOLD_DICE: usize = 3;

/// Craps totals that lose the round ("CRAPS").
pub const CRAPS_TOTALS: [u8; 2] = [7, 11];

/// Threshold variant: the single exact total that wins.
pub const THRESHOLD_EXACT_WIN: u8 = 10;

/// Threshold variant: totals at or above this win.
pub const THRESHOLD_HIGH_WIN: u8 = 12;

/// Winning rounds pay back the stake doubled.
pub const WIN_MULTIPLIER: f64 = 2.0;
