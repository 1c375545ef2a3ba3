use std::fmt;

/// The API call a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    Login,
    Search,
    Analysis,
}

impl RequestStage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Search => "Search",
            Self::Analysis => "Analysis",
        }
    }
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
