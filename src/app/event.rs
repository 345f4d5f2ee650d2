use crossterm::event::Event as CrosstermEvent;

/// Identifies one countdown cycle. Bumped every time a start is accepted.
pub type CycleId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The delay between pressing the button and the countdown appearing has
    /// elapsed.
    LaunchElapsed { cycle: CycleId },

    /// One second of the countdown has passed.
    CountdownTick { cycle: CycleId },

    /// The last tick's second has passed.
    CountdownFinished { cycle: CycleId },

    /// Frame tick for animation refresh
    Frame,
}
