use std::fmt;

/// Output kind the user wants to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum OutputFormat {
    #[default]
    Mp3,
    Mp4,
}

impl OutputFormat {
    pub fn toggled(self) -> Self {
        match self {
            OutputFormat::Mp3 => OutputFormat::Mp4,
            OutputFormat::Mp4 => OutputFormat::Mp3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "MP3",
            OutputFormat::Mp4 => "MP4",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
