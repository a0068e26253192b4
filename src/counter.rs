/// The three controls on the counter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl CounterAction {
    /// Button order on the card, left to right.
    pub const ALL: [CounterAction; 3] = [
        CounterAction::Decrement,
        CounterAction::Reset,
        CounterAction::Increment,
    ];

    /// No lower or upper bound; saturates only at the ends of `i64`.
    pub fn apply(self, value: i64) -> i64 {
        match self {
            CounterAction::Increment => value.saturating_add(1),
            CounterAction::Decrement => value.saturating_sub(1),
            CounterAction::Reset => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CounterAction::Increment => "+ Increment",
            CounterAction::Decrement => "- Decrement",
            CounterAction::Reset => "Reset",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CounterAction::Increment => "btn-increment",
            CounterAction::Decrement => "btn-decrement",
            CounterAction::Reset => "btn-reset",
        }
    }
}
