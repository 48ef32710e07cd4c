// Ordered allow-list of origins permitted to read cross-origin responses.
//
// Matching is exact string equality only. Entries keep their configured order
// and the first equal entry wins; duplicates are tolerated.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    // Return the allow-listed entry equal to `origin`, if any.
    pub fn matching(&self, origin: &str) -> Option<&str> {
        if origin.is_empty() {
            return None;
        }

        self.origins
            .iter()
            .find(|allowed| allowed.as_str() == origin)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }
}
