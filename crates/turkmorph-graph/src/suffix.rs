// Suffixes and their abstract allomorph spellings.

use turkmorph_core::PhoneticExpectation;

use crate::condition::{Condition, Postcondition};

/// One abstract spelling of a suffix.
///
/// `form` uses the allomorph notation: `A` (a/e), `I` (ı/i/u/ü), `D` (d/t),
/// `C` (c/ç), a leading `+` marking the first letter optional, any other
/// character literal. The empty form is a zero morpheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixForm {
    pub form: String,
    pub precondition: Option<Condition>,
    pub postcondition: Option<Postcondition>,
    /// Constraint imposed on the next non-empty suffix ("+yAcAğ" needs a
    /// vowel after it).
    pub expectation: Option<PhoneticExpectation>,
}

impl SuffixForm {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            precondition: None,
            postcondition: None,
            expectation: None,
        }
    }

    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.precondition = Some(condition);
        self
    }

    #[must_use]
    pub fn followed_by(mut self, postcondition: Postcondition) -> Self {
        self.postcondition = Some(postcondition);
        self
    }

    #[must_use]
    pub fn expecting(mut self, expectation: PhoneticExpectation) -> Self {
        self.expectation = Some(expectation);
        self
    }

    /// Whether the form can only ever produce the empty string.
    pub fn is_empty(&self) -> bool {
        self.form.is_empty()
    }
}

impl From<&str> for SuffixForm {
    fn from(form: &str) -> Self {
        SuffixForm::new(form)
    }
}

/// A suffix: a named morpheme with one or more forms.
///
/// `name` is unique within a graph ("A3sg_Verb"); `pretty_name` is what
/// formatted parses show ("A3sg"). Free suffixes label internal epsilon
/// edges and never appear in formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    pub name: String,
    pub pretty_name: String,
    pub forms: Vec<SuffixForm>,
    /// May be applied again before the next derivation.
    pub allow_repetition: bool,
    pub free: bool,
}

impl Suffix {
    pub fn new(name: impl Into<String>, pretty_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pretty_name: pretty_name.into(),
            forms: Vec::new(),
            allow_repetition: false,
            free: false,
        }
    }

    /// A free (epsilon) suffix with a single empty form.
    pub fn free(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            pretty_name: name.clone(),
            name,
            forms: vec![SuffixForm::new("")],
            allow_repetition: false,
            free: true,
        }
    }

    #[must_use]
    pub fn form(mut self, form: impl Into<SuffixForm>) -> Self {
        self.forms.push(form.into());
        self
    }

    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.allow_repetition = true;
        self
    }
}
