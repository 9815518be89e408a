pub struct Config {
    /// Output verbosity: 0 = full, 1 = trimmed, 2 = results only.
    pub quiet: u8,

    /// Disables colored output.
    ///
    /// Does not stop the log formatter from printing level symbols.
    pub plain: bool,
}
