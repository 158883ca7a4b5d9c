#[derive(Clone, Debug)]
pub struct Settings {
    pub shuffle: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { shuffle: false }
    }
}
