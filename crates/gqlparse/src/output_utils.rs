pub(crate) const GREEN_CHECK: &str = "\u{1b}[32m\u{2714}\u{1b}[0m";
pub(crate) const RED_X: &str = "\u{1b}[31m\u{2718}\u{1b}[0m";
