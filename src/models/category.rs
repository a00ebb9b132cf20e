/// Expense categories offered by the entry form.
///
/// The ledger file does not enforce this set, so a name read from disk that
/// matches none of the fixed variants is carried verbatim in `Unlisted`. The
/// form never produces that variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Food,
    Transportation,
    Entertainment,
    Bills,
    Others,
    Unlisted(String),
}

static CHOICES: [Category; 5] = [
    Category::Food,
    Category::Transportation,
    Category::Entertainment,
    Category::Bills,
    Category::Others,
];

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Others => "Others",
            Self::Unlisted(name) => name,
        }
    }

    /// Parse a stored category name. Exact match only, so foreign names
    /// round-trip unchanged.
    pub fn from_stored(s: &str) -> Self {
        Self::all()
            .iter()
            .find(|c| c.as_str() == s)
            .cloned()
            .unwrap_or_else(|| Self::Unlisted(s.to_string()))
    }

    /// Parse user input (case-insensitive). Only the fixed choices are accepted.
    pub fn parse_choice(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|c| c.as_str().to_lowercase() == lower)
            .cloned()
    }

    /// The fixed choice list, in form order.
    pub fn all() -> &'static [Category] {
        &CHOICES
    }

    /// Step through the fixed choices, wrapping at either end. `Unlisted`
    /// steps onto the first choice.
    pub fn cycle(&self, delta: i32) -> Self {
        let all = Self::all();
        let len = all.len() as i32;
        let idx = match all.iter().position(|c| c == self) {
            Some(i) => (i as i32 + delta).rem_euclid(len),
            None => 0,
        };
        all[idx as usize].clone()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
