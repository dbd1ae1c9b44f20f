use colored::*;

/// Where human-readable progress lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressReporter {
    Console,
    Silent,
}

impl ProgressReporter {
    pub fn report(&self, message: impl AsRef<str>) {
        if let ProgressReporter::Console = self {
            println!("{}", message.as_ref());
        }
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.report(format!("{} {}", "✅".green(), message.as_ref()));
    }
}
