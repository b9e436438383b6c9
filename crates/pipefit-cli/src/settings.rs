#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Print each command before its output.
    pub(crate) echo: bool,
    /// Print the grid after every command that changes it.
    pub(crate) auto_show: bool,
    /// Stop at the first rejected command.
    pub(crate) strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            echo: false,
            auto_show: true,
            strict: false,
        }
    }
}
