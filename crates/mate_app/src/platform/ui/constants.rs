pub const APP_TITLE: &str = "Mp3-Mate";
pub const TAGLINE: &str = "A DEVIL LOOTS Project";
pub const INTRO: &str = "Paste your YouTube video link below to convert and download it for free.";
pub const COPYRIGHT_NOTICE: &str = "Please respect copyright laws. This tool is for personal use only.";
pub const PROMPT: &str = "> ";

pub const CMD_FORMAT: [&str; 3] = [":f", ":format", ":toggle"];
pub const CMD_SUBMIT: [&str; 2] = [":s", ":submit"];
pub const CMD_HELP: [&str; 2] = [":h", ":help"];
pub const CMD_QUIT: [&str; 2] = [":q", ":quit"];
