// Base Turkish grammar: nouns, adjectives, adverbs, verbs, pronouns, the
// question particle and the uninflected closed classes.

use tracing::debug;
use turkmorph_core::{LexemeAttribute, PhoneticAttribute, PhoneticExpectation, SyntacticCategory};

use crate::condition::{Condition, Postcondition};
use crate::graph::{RootShape, SuffixGraph};
use crate::state::StateKind;
use crate::suffix::{Suffix, SuffixForm};
use crate::{GraphError, SuffixId};

use PhoneticExpectation::{ConsonantStart, VowelStart};
use StateKind::{Derivational, Terminal, Transfer};
use SyntacticCategory as Cat;

const STATES: &[(&str, StateKind, SyntacticCategory)] = &[
    ("NOUN_ROOT", Transfer, Cat::Noun),
    ("NOUN_COMPOUND_FULL_ROOT", Transfer, Cat::Noun),
    ("NOUN_COMPOUND_STEM_ROOT", Transfer, Cat::Noun),
    ("NOUN_WITH_AGREEMENT", Transfer, Cat::Noun),
    ("NOUN_COMPOUND_FULL_WITH_AGREEMENT", Transfer, Cat::Noun),
    ("NOUN_COMPOUND_STEM_WITH_AGREEMENT", Transfer, Cat::Noun),
    ("NOUN_WITH_POSSESSION", Transfer, Cat::Noun),
    ("NOUN_WITH_CASE", Transfer, Cat::Noun),
    ("NOUN_TERMINAL", Terminal, Cat::Noun),
    ("NOUN_NOM_DERIV", Derivational, Cat::Noun),
    ("NOUN_CASE_DERIV", Derivational, Cat::Noun),
    ("ADJECTIVE_ROOT", Transfer, Cat::Adj),
    ("ADJECTIVE_TERMINAL", Terminal, Cat::Adj),
    ("ADJECTIVE_DERIV", Derivational, Cat::Adj),
    ("ADVERB_ROOT", Transfer, Cat::Adv),
    ("ADVERB_TERMINAL", Terminal, Cat::Adv),
    ("VERB_ROOT", Transfer, Cat::Verb),
    ("VERB_ROOT_VOWEL_DROP", Transfer, Cat::Verb),
    ("VERB_PLAIN_DERIV", Derivational, Cat::Verb),
    ("VERB_WITH_POLARITY", Transfer, Cat::Verb),
    ("VERB_WITH_POLARITY_VOWEL_DROP", Transfer, Cat::Verb),
    ("VERB_POLARITY_DERIV", Derivational, Cat::Verb),
    ("VERB_WITH_TENSE", Transfer, Cat::Verb),
    ("VERB_WITH_PAST_TENSE", Transfer, Cat::Verb),
    ("VERB_OPTATIVE", Transfer, Cat::Verb),
    ("VERB_IMPERATIVE", Transfer, Cat::Verb),
    ("VERB_WITH_AGREEMENT", Transfer, Cat::Verb),
    ("VERB_TERMINAL", Terminal, Cat::Verb),
    ("PRONOUN_ROOT", Transfer, Cat::Pron),
    ("PRONOUN_WITH_AGREEMENT", Transfer, Cat::Pron),
    ("PRONOUN_WITH_POSSESSION", Transfer, Cat::Pron),
    ("PRONOUN_WITH_CASE", Transfer, Cat::Pron),
    ("PRONOUN_TERMINAL", Terminal, Cat::Pron),
    ("QUESTION_ROOT", Transfer, Cat::Ques),
    ("QUESTION_WITH_TENSE", Transfer, Cat::Ques),
    ("QUESTION_WITH_PAST_TENSE", Transfer, Cat::Ques),
    ("QUESTION_WITH_AGREEMENT", Transfer, Cat::Ques),
    ("QUESTION_TERMINAL", Terminal, Cat::Ques),
    ("CONJUNCTION_TERMINAL", Terminal, Cat::Conj),
    ("INTERJECTION_TERMINAL", Terminal, Cat::Interj),
    ("DETERMINER_TERMINAL", Terminal, Cat::Det),
    ("POSTPOSITION_TERMINAL", Terminal, Cat::Postp),
    ("DUPLICATOR_TERMINAL", Terminal, Cat::Dup),
    ("PARTICLE_TERMINAL", Terminal, Cat::Part),
];

/// Pronoun lemmas by person; everything else is third person singular.
const FIRST_SINGULAR: &[&str] = &["ben"];
const SECOND_SINGULAR: &[&str] = &["sen"];
const FIRST_PLURAL: &[&str] = &["biz"];
const SECOND_PLURAL: &[&str] = &["siz"];
const THIRD_PLURAL: &[&str] = &["onlar", "bunlar", "\u{015F}unlar"];
const PERSONAL: &[&str] = &[
    "ben",
    "sen",
    "biz",
    "siz",
    "onlar",
    "bunlar",
    "\u{015F}unlar",
];

/// Build the base grammar.
pub fn basic_suffix_graph() -> Result<SuffixGraph, GraphError> {
    let mut g = SuffixGraph::new();
    for &(name, kind, category) in STATES {
        g.add_state(name, kind, category, None)?;
    }

    build_nouns(&mut g)?;
    build_adjectives(&mut g)?;
    build_verbs(&mut g)?;
    build_pronouns(&mut g)?;
    build_question_particle(&mut g)?;
    add_root_rules(&mut g)?;

    debug!(
        states = g.state_count(),
        suffixes = g.suffix_count(),
        transitions = g.transition_count(),
        "built base suffix graph"
    );
    Ok(g)
}

fn add_root_rules(g: &mut SuffixGraph) -> Result<(), GraphError> {
    let rules: &[(SyntacticCategory, RootShape, &str)] = &[
        (Cat::Noun, RootShape::Plain, "NOUN_ROOT"),
        (Cat::Noun, RootShape::CompoundFull, "NOUN_COMPOUND_FULL_ROOT"),
        (Cat::Noun, RootShape::CompoundStem, "NOUN_COMPOUND_STEM_ROOT"),
        (Cat::Adj, RootShape::Plain, "ADJECTIVE_ROOT"),
        (Cat::Adv, RootShape::Plain, "ADVERB_ROOT"),
        (Cat::Verb, RootShape::Plain, "VERB_ROOT"),
        (Cat::Verb, RootShape::VowelDropped, "VERB_ROOT_VOWEL_DROP"),
        (Cat::Pron, RootShape::Plain, "PRONOUN_ROOT"),
        (Cat::Ques, RootShape::Plain, "QUESTION_ROOT"),
        (Cat::Conj, RootShape::Plain, "CONJUNCTION_TERMINAL"),
        (Cat::Interj, RootShape::Plain, "INTERJECTION_TERMINAL"),
        (Cat::Det, RootShape::Plain, "DETERMINER_TERMINAL"),
        (Cat::Postp, RootShape::Plain, "POSTPOSITION_TERMINAL"),
        (Cat::Dup, RootShape::Plain, "DUPLICATOR_TERMINAL"),
        (Cat::Part, RootShape::Plain, "PARTICLE_TERMINAL"),
    ];
    for &(category, shape, state) in rules {
        let state = g.state_id(state)?;
        g.add_root_rule(category, None, shape, state);
    }
    Ok(())
}

fn simple(
    g: &mut SuffixGraph,
    name: &str,
    pretty: &str,
    form: &str,
) -> Result<SuffixId, GraphError> {
    g.add_suffix(Suffix::new(name, pretty).form(form))
}

/// A suffix whose last consonant `k` voices to `ğ` before a vowel.
fn voicing(
    g: &mut SuffixGraph,
    name: &str,
    pretty: &str,
    unvoiced: &str,
    voiced: &str,
) -> Result<SuffixId, GraphError> {
    voicing_when(g, name, pretty, unvoiced, voiced, None)
}

fn voicing_when(
    g: &mut SuffixGraph,
    name: &str,
    pretty: &str,
    unvoiced: &str,
    voiced: &str,
    condition: Option<Condition>,
) -> Result<SuffixId, GraphError> {
    let mut plain = SuffixForm::new(unvoiced).expecting(ConsonantStart);
    let mut before_vowel = SuffixForm::new(voiced).expecting(VowelStart);
    if let Some(condition) = condition {
        plain = plain.when(condition.clone());
        before_vowel = before_vowel.when(condition);
    }
    g.add_suffix(Suffix::new(name, pretty).form(plain).form(before_vowel))
}

fn build_nouns(g: &mut SuffixGraph) -> Result<(), GraphError> {
    let root = g.state_id("NOUN_ROOT")?;
    let compound_full = g.state_id("NOUN_COMPOUND_FULL_ROOT")?;
    let compound_stem = g.state_id("NOUN_COMPOUND_STEM_ROOT")?;
    let with_agreement = g.state_id("NOUN_WITH_AGREEMENT")?;
    let full_with_agreement = g.state_id("NOUN_COMPOUND_FULL_WITH_AGREEMENT")?;
    let stem_with_agreement = g.state_id("NOUN_COMPOUND_STEM_WITH_AGREEMENT")?;
    let with_possession = g.state_id("NOUN_WITH_POSSESSION")?;
    let with_case = g.state_id("NOUN_WITH_CASE")?;
    let terminal = g.state_id("NOUN_TERMINAL")?;
    let nom_deriv = g.state_id("NOUN_NOM_DERIV")?;
    let case_deriv = g.state_id("NOUN_CASE_DERIV")?;
    let adj_root = g.state_id("ADJECTIVE_ROOT")?;
    let verb_root = g.state_id("VERB_ROOT")?;

    let a3sg = simple(g, "A3sg_Noun", "A3sg", "")?;
    let a3pl = simple(g, "A3pl_Noun", "A3pl", "lAr")?;
    g.connect(root, a3sg, with_agreement);
    g.connect(root, a3pl, with_agreement);
    g.connect(compound_full, a3sg, full_with_agreement);
    g.connect(compound_stem, a3sg, stem_with_agreement);
    g.connect(compound_stem, a3pl, stem_with_agreement);

    let pnon = simple(g, "Pnon_Noun", "Pnon", "")?;
    let p1sg = simple(g, "P1sg_Noun", "P1sg", "+Im")?;
    let p2sg = simple(g, "P2sg_Noun", "P2sg", "+In")?;
    // A compound stem only takes the bare marker after a plural.
    let own_marker = Condition::RootAttribute(LexemeAttribute::CompoundP3sg)
        .and(Condition::doesnt_come_after(a3pl))
        .negate();
    let p3sg = g.add_suffix(
        Suffix::new("P3sg_Noun", "P3sg")
            .form(SuffixForm::new("+sI").when(own_marker))
            .form(SuffixForm::new("").when(Condition::CompoundFullForm)),
    )?;
    let p1pl = simple(g, "P1pl_Noun", "P1pl", "+ImIz")?;
    let p2pl = simple(g, "P2pl_Noun", "P2pl", "+InIz")?;
    let singular = Condition::doesnt_come_after(a3pl);
    let p3pl = g.add_suffix(
        Suffix::new("P3pl_Noun", "P3pl")
            .form(SuffixForm::new("lArI").when(singular))
            .form(SuffixForm::new("I").when(Condition::comes_after(a3pl))),
    )?;
    for possessive in [pnon, p1sg, p2sg, p3sg, p1pl, p2pl, p3pl] {
        g.connect(with_agreement, possessive, with_possession);
    }
    g.connect(full_with_agreement, p3sg, with_possession);
    for possessive in [p1sg, p2sg, p3sg, p1pl, p2pl, p3pl] {
        g.connect(stem_with_agreement, possessive, with_possession);
    }

    let third_person = [p3sg, p3pl];
    let buffered = |plain: &str, after_p3: &str| {
        [
            SuffixForm::new(plain).when(Condition::doesnt_come_after_any(&third_person)),
            SuffixForm::new(after_p3).when(Condition::comes_after_any(&third_person)),
        ]
    };
    let with_buffer = |name: &str, pretty: &str, forms: [SuffixForm; 2]| {
        let [plain, after_p3] = forms;
        Suffix::new(name, pretty).form(plain).form(after_p3)
    };

    let nom = simple(g, "Nom_Noun", "Nom", "")?;
    let nom_for_derivation = simple(g, "Nom_Deriv_Noun", "Nom", "")?;
    let acc = g.add_suffix(with_buffer("Acc_Noun", "Acc", buffered("+yI", "nI")))?;
    let dat = g.add_suffix(with_buffer("Dat_Noun", "Dat", buffered("+yA", "nA")))?;
    let loc = g.add_suffix(with_buffer("Loc_Noun", "Loc", buffered("DA", "ndA")))?;
    let abl = g.add_suffix(with_buffer("Abl_Noun", "Abl", buffered("DAn", "ndAn")))?;
    let genitive = simple(g, "Gen_Noun", "Gen", "+nIn")?;
    let ins = simple(g, "Ins_Noun", "Ins", "+ylA")?;
    let equ = g.add_suffix(with_buffer("Equ_Noun", "Equ", buffered("CA", "ncA")))?;

    for case in [nom, acc, dat, loc, abl, genitive, ins, equ] {
        g.connect(with_possession, case, with_case);
    }
    g.connect(with_possession, nom_for_derivation, nom_deriv);
    g.connect(with_possession, loc, case_deriv);
    g.connect(with_possession, genitive, case_deriv);

    let free = g.add_suffix(Suffix::free("Free_Noun"))?;
    g.connect(with_case, free, terminal);

    // Derivations from the bare singular stem.
    let bare = || Condition::comes_after(pnon).and(Condition::doesnt_come_after(a3pl));
    let dim = voicing_when(g, "Dim_Noun", "Dim", "CIk", "CI\u{011F}", Some(bare()))?;
    let ness = voicing_when(g, "Ness_Noun", "Ness", "lIk", "lI\u{011F}", Some(bare()))?;
    let from_bare = |name: &str, pretty: &str, form: &str| {
        Suffix::new(name, pretty).form(SuffixForm::new(form).when(bare()))
    };
    let agt = g.add_suffix(from_bare("Agt_Noun", "Agt", "CI"))?;
    let with = g.add_suffix(from_bare("With_Noun", "With", "lI"))?;
    let without = g.add_suffix(from_bare("Without_Noun", "Without", "sIz"))?;
    let become_noun = g.add_suffix(from_bare("Become_Noun", "Become", "lA\u{015F}"))?;
    let acquire = g.add_suffix(from_bare("Acquire_Noun", "Acquire", "lAn"))?;
    g.connect(nom_deriv, dim, root);
    g.connect(nom_deriv, ness, root);
    g.connect(nom_deriv, agt, root);
    g.connect(nom_deriv, with, adj_root);
    g.connect(nom_deriv, without, adj_root);
    g.connect(nom_deriv, become_noun, verb_root);
    g.connect(nom_deriv, acquire, verb_root);

    let rel = simple(g, "Rel_Noun", "Rel", "ki")?;
    g.connect(case_deriv, rel, adj_root);
    Ok(())
}

fn build_adjectives(g: &mut SuffixGraph) -> Result<(), GraphError> {
    let root = g.state_id("ADJECTIVE_ROOT")?;
    let terminal = g.state_id("ADJECTIVE_TERMINAL")?;
    let deriv = g.state_id("ADJECTIVE_DERIV")?;
    let noun_root = g.state_id("NOUN_ROOT")?;
    let verb_root = g.state_id("VERB_ROOT")?;
    let adv_root = g.state_id("ADVERB_ROOT")?;
    let adv_terminal = g.state_id("ADVERB_TERMINAL")?;

    let free = g.add_suffix(Suffix::free("Free_Adj"))?;
    let free_deriv = g.add_suffix(Suffix::free("Free_Adj_Deriv"))?;
    g.connect(root, free, terminal);
    g.connect(root, free_deriv, deriv);

    let zero = simple(g, "Zero_Adj_Noun", "Zero", "")?;
    let ly = simple(g, "Ly_Adj", "Ly", "CA")?;
    let become_adj = simple(g, "Become_Adj", "Become", "lA\u{015F}")?;
    let ness = voicing(g, "Ness_Adj", "Ness", "lIk", "lI\u{011F}")?;
    g.connect(deriv, zero, noun_root);
    g.connect(deriv, ly, adv_root);
    g.connect(deriv, become_adj, verb_root);
    g.connect(deriv, ness, noun_root);

    let free_adv = g.add_suffix(Suffix::free("Free_Adv"))?;
    g.connect(adv_root, free_adv, adv_terminal);
    Ok(())
}

/// Person agreement after present-type tenses ("geliyor-um").
struct Agreements {
    a1sg: SuffixId,
    a2sg: SuffixId,
    a3sg: SuffixId,
    a1pl: SuffixId,
    a2pl: SuffixId,
    a3pl: SuffixId,
}

impl Agreements {
    fn all(&self) -> [SuffixId; 6] {
        [
            self.a1sg, self.a2sg, self.a3sg, self.a1pl, self.a2pl, self.a3pl,
        ]
    }
}

fn agreements(
    g: &mut SuffixGraph,
    family: &str,
    forms: [&str; 6],
) -> Result<Agreements, GraphError> {
    let [a1sg, a2sg, a3sg, a1pl, a2pl, a3pl] = forms;
    Ok(Agreements {
        a1sg: simple(g, &format!("A1sg_{family}"), "A1sg", a1sg)?,
        a2sg: simple(g, &format!("A2sg_{family}"), "A2sg", a2sg)?,
        a3sg: simple(g, &format!("A3sg_{family}"), "A3sg", a3sg)?,
        a1pl: simple(g, &format!("A1pl_{family}"), "A1pl", a1pl)?,
        a2pl: simple(g, &format!("A2pl_{family}"), "A2pl", a2pl)?,
        a3pl: simple(g, &format!("A3pl_{family}"), "A3pl", a3pl)?,
    })
}

fn build_verbs(g: &mut SuffixGraph) -> Result<(), GraphError> {
    let root = g.state_id("VERB_ROOT")?;
    let root_vowel_drop = g.state_id("VERB_ROOT_VOWEL_DROP")?;
    let plain_deriv = g.state_id("VERB_PLAIN_DERIV")?;
    let with_polarity = g.state_id("VERB_WITH_POLARITY")?;
    let with_polarity_vowel_drop = g.state_id("VERB_WITH_POLARITY_VOWEL_DROP")?;
    let polarity_deriv = g.state_id("VERB_POLARITY_DERIV")?;
    let with_tense = g.state_id("VERB_WITH_TENSE")?;
    let with_past = g.state_id("VERB_WITH_PAST_TENSE")?;
    let optative = g.state_id("VERB_OPTATIVE")?;
    let imperative = g.state_id("VERB_IMPERATIVE")?;
    let with_agreement = g.state_id("VERB_WITH_AGREEMENT")?;
    let terminal = g.state_id("VERB_TERMINAL")?;
    let noun_root = g.state_id("NOUN_ROOT")?;
    let adj_root = g.state_id("ADJECTIVE_ROOT")?;
    let adv_root = g.state_id("ADVERB_ROOT")?;

    // Voice derivations.
    let free_plain = g.add_suffix(Suffix::free("Free_Verb_Plain"))?;
    g.connect(root, free_plain, plain_deriv);

    use LexemeAttribute as Attr;
    let vowel_final = || Condition::Phonetic(PhoneticAttribute::LastLetterVowel);
    let defaults = |family: &'static [LexemeAttribute], shape: Condition, short: bool| {
        let shape = if short { shape } else { shape.negate() };
        Condition::DefaultsApply(family).and(shape)
    };
    let caus_shape = || vowel_final().or(Condition::EndsWithAny(&['l', 'r']));
    let caus_default = |short| defaults(LexemeAttribute::CAUSATIVES, caus_shape(), short);
    let caus_t = attr(Attr::CausativeT).or(caus_default(true));
    let caus_dir = attr(Attr::CausativeDIr).or(caus_default(false));
    let caus = g.add_suffix(
        Suffix::new("Caus_Verb", "Caus")
            .form(SuffixForm::new("t").when(caus_t))
            .form(SuffixForm::new("It").when(attr(Attr::CausativeIt)))
            .form(SuffixForm::new("Ir").when(attr(Attr::CausativeIr)))
            .form(SuffixForm::new("Ar").when(attr(Attr::CausativeAr)))
            .form(SuffixForm::new("DIr").when(caus_dir))
            .repeatable(),
    )?;
    let pass_shape = || vowel_final().or(Condition::EndsWithAny(&['l']));
    let pass_default = |short| defaults(LexemeAttribute::PASSIVES, pass_shape(), short);
    let pass_in = attr(Attr::PassiveIn).or(pass_default(true));
    let pass_il = attr(Attr::PassiveIl).or(pass_default(false));
    let pass = g.add_suffix(
        Suffix::new("Pass_Verb", "Pass")
            .form(SuffixForm::new("+In").when(pass_in))
            .form(SuffixForm::new("Il").when(pass_il))
            .form(SuffixForm::new("InIl").when(attr(Attr::PassiveInIl))),
    )?;
    let recip = simple(g, "Recip_Verb", "Recip", "+I\u{015F}")?;
    let able = simple(g, "Able_Verb", "Able", "+yAbil")?;
    for derivation in [caus, pass, recip, able] {
        g.connect(plain_deriv, derivation, root);
    }

    // Polarity.
    let pos = simple(g, "Pos_Verb", "Pos", "")?;
    let neg = g.add_suffix(Suffix::new("Neg_Verb", "Neg").form("mA"))?;
    g.connect(root, pos, with_polarity);
    g.connect(root, neg, with_polarity);
    g.connect(root_vowel_drop, pos, with_polarity_vowel_drop);

    // Vowel-final stems take the progressive through the vowel-dropped root
    // ("ar-ıyor" not "ara-yor") or the short negative ("gel-m-iyor").
    let dropping = Condition::comes_after(neg).or(attr(Attr::ProgressiveVowelDrop));
    let keeps_vowel = vowel_final().and(dropping).negate();
    let prog1 = g.add_suffix(
        Suffix::new("Prog1_Verb", "Prog1").form(SuffixForm::new("+Iyor").when(keeps_vowel)),
    )?;
    // The short negative only exists before the progressive.
    let short_neg = SuffixForm::new("m").followed_by(Postcondition::FollowedBy(prog1));
    add_form(g, neg, short_neg);

    // Tenses.
    let positive = || Condition::doesnt_come_after(neg);
    let aorist_a = attr(Attr::AoristA).and(positive());
    let aor = g.add_suffix(
        Suffix::new("Aor_Verb", "Aor")
            .form(SuffixForm::new("+Ar").when(aorist_a))
            .form(SuffixForm::new("+Ir").when(
                attr(Attr::AoristI)
                    .or(Condition::DefaultsApply(LexemeAttribute::AORISTS))
                    .and(positive()),
            ))
            .form(SuffixForm::new("z").when(Condition::comes_after(neg))),
    )?;
    let prog2 = simple(g, "Prog2_Verb", "Prog2", "mAktA")?;
    let fut = voicing(g, "Fut_Verb", "Fut", "+yAcAk", "+yAcA\u{011F}")?;
    let narr = simple(g, "Narr_Verb", "Narr", "mI\u{015F}")?;
    let neces = simple(g, "Neces_Verb", "Neces", "mAlI")?;
    let past = simple(g, "Past_Verb", "Past", "DI")?;
    let cond = simple(g, "Cond_Verb", "Cond", "sA")?;
    let opt = simple(g, "Opt_Verb", "Opt", "+yA")?;
    let imp = simple(g, "Imp_Verb", "Imp", "")?;
    for tense in [aor, prog1, prog2, fut, narr, neces] {
        g.connect(with_polarity, tense, with_tense);
    }
    g.connect(with_polarity, past, with_past);
    g.connect(with_polarity, cond, with_past);
    g.connect(with_polarity, opt, optative);
    g.connect(with_polarity, imp, imperative);
    g.connect(with_polarity_vowel_drop, prog1, with_tense);

    let past_cop = simple(g, "Past_Cop_Verb", "Past", "+ydI")?;
    let cond_cop = simple(g, "Cond_Cop_Verb", "Cond", "+ysA")?;
    g.connect(with_tense, past_cop, with_past);
    g.connect(with_tense, cond_cop, with_past);

    // Agreement.
    let present = agreements(g, "Verb", ["+yIm", "sIn", "", "+yIz", "sInIz", "lAr"])?;
    let personal = agreements(g, "Past_Verb", ["m", "n", "", "k", "nIz", "lAr"])?;
    for agreement in present.all() {
        g.connect(with_tense, agreement, with_agreement);
    }
    for agreement in personal.all() {
        g.connect(with_past, agreement, with_agreement);
    }
    let a1pl_opt = simple(g, "A1pl_Opt_Verb", "A1pl", "lIm")?;
    let mut optative_agreements = present.all();
    optative_agreements[3] = a1pl_opt;
    for agreement in optative_agreements {
        g.connect(optative, agreement, with_agreement);
    }
    let a2sg_imp = simple(g, "A2sg_Imp_Verb", "A2sg", "")?;
    let a3sg_imp = simple(g, "A3sg_Imp_Verb", "A3sg", "sIn")?;
    let a2pl_imp = Suffix::new("A2pl_Imp_Verb", "A2pl")
        .form("+yIn")
        .form("+yInIz");
    let a2pl_imp = g.add_suffix(a2pl_imp)?;
    let a3pl_imp = simple(g, "A3pl_Imp_Verb", "A3pl", "sInlAr")?;
    for agreement in [a2sg_imp, a3sg_imp, a2pl_imp, a3pl_imp] {
        g.connect(imperative, agreement, with_agreement);
    }

    let free_terminal = g.add_suffix(Suffix::free("Free_Verb"))?;
    let cop = simple(g, "Cop_Verb", "Cop", "DIr")?;
    g.connect(with_agreement, free_terminal, terminal);
    g.connect(with_agreement, cop, terminal);

    // Nominal and adverbial derivations.
    let free_polarity = g.add_suffix(Suffix::free("Free_Verb_Polarity"))?;
    g.connect(with_polarity, free_polarity, polarity_deriv);

    let inf1 = simple(g, "Inf1_Verb", "Inf", "mAk")?;
    let inf2 = simple(g, "Inf2_Verb", "Inf", "mA")?;
    let inf3 = simple(g, "Inf3_Verb", "Inf", "+yI\u{015F}")?;
    let past_part = voicing(g, "PastPart_Verb", "PastPart", "DIk", "DI\u{011F}")?;
    let fut_part = voicing(g, "FutPart_Verb", "FutPart", "+yAcAk", "+yAcA\u{011F}")?;
    let agt = simple(g, "Agt_Verb", "Agt", "+yIcI")?;
    for derivation in [inf1, inf2, inf3, past_part, fut_part, agt] {
        g.connect(polarity_deriv, derivation, noun_root);
    }
    let pres_part = simple(g, "PresPart_Verb", "PresPart", "+yAn")?;
    g.connect(polarity_deriv, pres_part, adj_root);

    let after_doing = simple(g, "AfterDoingSo_Verb", "AfterDoingSo", "+yIp")?;
    let by_doing = simple(g, "ByDoingSo_Verb", "ByDoingSo", "+yArAk")?;
    let when = simple(g, "When_Verb", "When", "+yIncA")?;
    let since = simple(g, "SinceDoingSo_Verb", "SinceDoingSo", "+yAlI")?;
    let without = g.add_suffix(
        Suffix::new("WithoutHavingDoneSo_Verb", "WithoutHavingDoneSo")
            .form(SuffixForm::new("mAdAn").when(Condition::comes_after(pos))),
    )?;
    for converb in [after_doing, by_doing, when, since, without] {
        g.connect(polarity_deriv, converb, adv_root);
    }
    Ok(())
}

fn attr(attribute: LexemeAttribute) -> Condition {
    Condition::RootAttribute(attribute)
}

fn add_form(g: &mut SuffixGraph, suffix: SuffixId, form: SuffixForm) {
    g.suffix_mut(suffix).forms.push(form);
}

fn build_pronouns(g: &mut SuffixGraph) -> Result<(), GraphError> {
    let root = g.state_id("PRONOUN_ROOT")?;
    let with_agreement = g.state_id("PRONOUN_WITH_AGREEMENT")?;
    let with_possession = g.state_id("PRONOUN_WITH_POSSESSION")?;
    let with_case = g.state_id("PRONOUN_WITH_CASE")?;
    let terminal = g.state_id("PRONOUN_TERMINAL")?;

    let person = |name: &str, pretty: &str, condition: Condition| {
        Suffix::new(name, pretty).form(SuffixForm::new("").when(condition))
    };
    let persons = [
        person("A1sg_Pron", "A1sg", Condition::LemmaIn(FIRST_SINGULAR)),
        person("A2sg_Pron", "A2sg", Condition::LemmaIn(SECOND_SINGULAR)),
        person("A3sg_Pron", "A3sg", Condition::LemmaIn(PERSONAL).negate()),
        person("A1pl_Pron", "A1pl", Condition::LemmaIn(FIRST_PLURAL)),
        person("A2pl_Pron", "A2pl", Condition::LemmaIn(SECOND_PLURAL)),
        person("A3pl_Pron", "A3pl", Condition::LemmaIn(THIRD_PLURAL)),
    ];
    for suffix in persons {
        let id = g.add_suffix(suffix)?;
        g.connect(root, id, with_agreement);
    }

    let pnon = simple(g, "Pnon_Pron", "Pnon", "")?;
    g.connect(with_agreement, pnon, with_possession);

    let cases: &[(&str, &str, &str)] = &[
        ("Nom_Pron", "Nom", ""),
        ("Acc_Pron", "Acc", "+nI"),
        ("Dat_Pron", "Dat", "+nA"),
        ("Loc_Pron", "Loc", "+ndA"),
        ("Abl_Pron", "Abl", "+ndAn"),
        ("Gen_Pron", "Gen", "+nIn"),
    ];
    for &(name, pretty, form) in cases {
        let id = simple(g, name, pretty, form)?;
        g.connect(with_possession, id, with_case);
    }

    let free = g.add_suffix(Suffix::free("Free_Pron"))?;
    g.connect(with_case, free, terminal);
    Ok(())
}

fn build_question_particle(g: &mut SuffixGraph) -> Result<(), GraphError> {
    let root = g.state_id("QUESTION_ROOT")?;
    let with_tense = g.state_id("QUESTION_WITH_TENSE")?;
    let with_past = g.state_id("QUESTION_WITH_PAST_TENSE")?;
    let with_agreement = g.state_id("QUESTION_WITH_AGREEMENT")?;
    let terminal = g.state_id("QUESTION_TERMINAL")?;

    let pres = simple(g, "Pres_Ques", "Pres", "")?;
    let narr = simple(g, "Narr_Ques", "Narr", "+ymI\u{015F}")?;
    let past = simple(g, "Past_Ques", "Past", "+ydI")?;
    g.connect(root, pres, with_tense);
    g.connect(root, narr, with_tense);
    g.connect(root, past, with_past);

    for name in ["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"] {
        let present = g.suffix_id(&format!("{name}_Verb"))?;
        let personal = g.suffix_id(&format!("{name}_Past_Verb"))?;
        g.connect(with_tense, present, with_agreement);
        g.connect(with_past, personal, with_agreement);
    }

    let free = g.add_suffix(Suffix::free("Free_Ques"))?;
    g.connect(with_agreement, free, terminal);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;

    use hashbrown::HashSet;
    use turkmorph_core::{Lexeme, LexemeAttributes, Root, RootOrigin};

    use super::*;

    fn graph() -> SuffixGraph {
        basic_suffix_graph().expect("base graph builds")
    }

    fn root(
        surface: &str,
        lemma: &str,
        lemma_root: &str,
        primary: SyntacticCategory,
        attrs: &[LexemeAttribute],
    ) -> Root {
        let attrs = LexemeAttributes::from_slice(attrs);
        let lexeme = Arc::new(Lexeme::new(lemma, lemma_root, primary, None, attrs));
        Root::new(surface, lexeme, RootOrigin::Dictionary)
    }

    #[test]
    fn every_state_reaches_a_terminal() {
        let g = graph();
        for start in 0..g.state_count() {
            let start = crate::StateId(start as u16);
            let mut seen = HashSet::new();
            let mut queue = VecDeque::from([start]);
            let mut found = false;
            while let Some(state) = queue.pop_front() {
                if g.state(state).is_terminal() {
                    found = true;
                    break;
                }
                for t in g.outgoing(state) {
                    if seen.insert(t.to) {
                        queue.push_back(t.to);
                    }
                }
            }
            let name = &g.state(start).name;
            assert!(found, "{name} cannot reach a terminal state");
        }
    }

    #[test]
    fn root_states_by_category_and_shape() {
        let g = graph();
        let noun = root("ev", "ev", "ev", SyntacticCategory::Noun, &[]);
        assert_eq!(g.root_state(&noun), g.state_id("NOUN_ROOT").ok());

        let drop = [LexemeAttribute::ProgressiveVowelDrop];
        let dropped = root("ar", "aramak", "ara", SyntacticCategory::Verb, &drop);
        let expected = g.state_id("VERB_ROOT_VOWEL_DROP").ok();
        assert_eq!(g.root_state(&dropped), expected);

        let full = root(
            "zeytinya\u{011F}\u{0131}",
            "zeytinya\u{011F}\u{0131}",
            "zeytinya\u{011F}",
            SyntacticCategory::Noun,
            &[LexemeAttribute::CompoundP3sg],
        );
        let expected = g.state_id("NOUN_COMPOUND_FULL_ROOT").ok();
        assert_eq!(g.root_state(&full), expected);
        let stem = full.to_compound_stem().unwrap();
        let expected = g.state_id("NOUN_COMPOUND_STEM_ROOT").ok();
        assert_eq!(g.root_state(&stem), expected);

        let conj = root("ve", "ve", "ve", SyntacticCategory::Conj, &[]);
        assert_eq!(g.root_state(&conj), g.state_id("CONJUNCTION_TERMINAL").ok());
    }

    #[test]
    fn numerals_need_an_overlay() {
        let g = graph();
        let num = root("bir", "bir", "bir", SyntacticCategory::Num, &[]);
        assert_eq!(g.root_state(&num), None);
    }

    #[test]
    fn short_negative_requires_progressive() {
        let g = graph();
        let neg = g.suffix(g.suffix_id("Neg_Verb").unwrap());
        let prog1 = g.suffix_id("Prog1_Verb").unwrap();
        assert_eq!(neg.forms.len(), 2);
        assert_eq!(neg.forms[1].form, "m");
        let followed = Some(Postcondition::FollowedBy(prog1));
        assert_eq!(neg.forms[1].postcondition, followed);
    }

    #[test]
    fn genitive_and_become_edges() {
        let g = graph();
        let targets = |from: &str, suffix: &str| -> Vec<String> {
            let suffix = g.suffix_id(suffix).unwrap();
            g.outgoing(g.state_id(from).unwrap())
                .filter(|t| t.suffix == suffix)
                .map(|t| g.state(t.to).name.clone())
                .collect()
        };
        assert_eq!(
            targets("NOUN_WITH_POSSESSION", "Gen_Noun"),
            ["NOUN_WITH_CASE", "NOUN_CASE_DERIV"]
        );
        assert_eq!(targets("NOUN_NOM_DERIV", "Become_Noun"), ["VERB_ROOT"]);
        assert_eq!(targets("ADJECTIVE_DERIV", "Become_Adj"), ["VERB_ROOT"]);
    }

    #[test]
    fn derivational_states_are_marked() {
        let g = graph();
        let derivational = |name: &str| {
            let id = g.state_id(name).unwrap();
            g.state(id).is_derivational()
        };
        for name in [
            "NOUN_NOM_DERIV",
            "ADJECTIVE_DERIV",
            "VERB_PLAIN_DERIV",
            "VERB_POLARITY_DERIV",
        ] {
            assert!(derivational(name), "{name}");
        }
        assert!(!derivational("NOUN_WITH_CASE"));
    }
}
