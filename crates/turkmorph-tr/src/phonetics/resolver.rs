// Allomorph resolution: abstract suffix forms to concrete surfaces.

use turkmorph_core::alphabet::{
    high_vowel, is_frontal, is_letter, is_rounded, is_voiceless, is_vowel, low_vowel,
};
use turkmorph_core::{PhoneticAttribute, PhoneticAttributes};

/// Running phonetic context while a form is spelled out letter by letter.
#[derive(Debug, Clone, Copy)]
struct Context {
    last_is_vowel: bool,
    frontal: bool,
    rounded: bool,
    voiceless: bool,
}

impl Context {
    fn from_attributes(attrs: PhoneticAttributes) -> Self {
        Self {
            last_is_vowel: attrs.contains(PhoneticAttribute::LastLetterVowel),
            frontal: attrs.contains(PhoneticAttribute::LastVowelFrontal),
            rounded: attrs.contains(PhoneticAttribute::LastVowelRounded),
            voiceless: attrs.contains(PhoneticAttribute::LastLetterVoiceless),
        }
    }

    /// Concrete letter for a form character in this context.
    fn realize(&self, c: char) -> char {
        match c {
            'A' => low_vowel(self.frontal),
            'I' => high_vowel(self.frontal, self.rounded),
            'D' if self.voiceless => 't',
            'D' => 'd',
            'C' if self.voiceless => '\u{00E7}',
            'C' => 'c',
            other => other,
        }
    }

    fn push(&mut self, c: char) {
        if !is_letter(c) {
            return;
        }
        if is_vowel(c) {
            self.last_is_vowel = true;
            self.frontal = is_frontal(c);
            self.rounded = is_rounded(c);
            self.voiceless = false;
        } else {
            self.last_is_vowel = false;
            self.voiceless = is_voiceless(c);
        }
    }
}

/// Resolve an abstract suffix form against the phonetic attributes of the
/// text it attaches to.
///
/// Returns `None` when the form cannot attach: a form starting with a
/// mandatory vowel after a vowel-final stem. A leading `+` makes the next
/// letter optional: a vowel is kept only after a consonant, a consonant
/// only after a vowel.
pub fn resolve(form: &str, attrs: PhoneticAttributes) -> Option<String> {
    let mut ctx = Context::from_attributes(attrs);
    let mut out = String::with_capacity(form.len() + 2);
    let mut chars = form.chars().peekable();

    if chars.peek() == Some(&'+') {
        chars.next();
        if let Some(optional) = chars.next() {
            let letter = ctx.realize(optional);
            let keep = if is_vowel(letter) {
                !ctx.last_is_vowel
            } else {
                ctx.last_is_vowel
            };
            if keep {
                out.push(letter);
                ctx.push(letter);
            }
        }
    } else if let Some(&first) = chars.peek() {
        if ctx.last_is_vowel && is_vowel(ctx.realize(first)) {
            return None;
        }
    }

    for c in chars {
        let letter = ctx.realize(c);
        out.push(letter);
        ctx.push(letter);
    }
    Some(out)
}
