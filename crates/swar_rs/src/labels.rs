//! Display labels per language.
//!
//! Labels are looked up from enum values at render time only; nothing in
//! the schedule compares against these strings.

use swar_base::{Phase, Tattva};
use swar_config::Language;

/// Text for one display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub rule: &'static str,
    pub start_swar: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub active: &'static str,
    pub schedule: &'static str,
    pub time_slot: &'static str,
    pub swar: &'static str,
    pub status: &'static str,
    pub tattva_title: &'static str,
    pub ends_at: &'static str,
    pub prithvi: &'static str,
    pub jal: &'static str,
    pub agni: &'static str,
    pub vayu: &'static str,
    pub akash: &'static str,
}

const ENGLISH: Labels = Labels {
    title: "Swar Shastra Assistant",
    subtitle: "Bhrigu Nandi Nadi & Swara Yoga",
    rule: "Rule: Sunrise Tithi applies for the full 24 hours.",
    start_swar: "Sunrise Starting Swar",
    left: "Left (Chandra Swar)",
    right: "Right (Surya Swar)",
    active: "ACTIVE NOW",
    schedule: "Daily 2-Hour Schedule",
    time_slot: "Time Slot",
    swar: "Active Swar",
    status: "Status",
    tattva_title: "Current Tattva",
    ends_at: "until",
    prithvi: "Prithvi (Earth)",
    jal: "Jal (Water)",
    agni: "Agni (Fire)",
    vayu: "Vayu (Air)",
    akash: "Akash (Ether)",
};

const GUJARATI: Labels = Labels {
    title: "સ્વર શાસ્ત્ર મદદનીશ",
    subtitle: "ભૃગુ નંદી નાડી અને સ્વર યોગ",
    rule: "નિયમ: સૂર્યોદયની તિથિ આખા દિવસ માટે ગણાય છે.",
    start_swar: "સૂર્યોદયનો પ્રથમ સ્વર",
    left: "ડાબું નાક (ચંદ્ર સ્વર)",
    right: "જમણું નાક (સૂર્ય સ્વર)",
    active: "અત્યારે ચાલુ",
    schedule: "આખા દિવસનું શિડ્યુલ",
    time_slot: "સમયગાળો",
    swar: "ચાલુ સ્વર",
    status: "સ્થિતિ",
    tattva_title: "અત્યારનું તત્વ",
    ends_at: "સુધી",
    prithvi: "પૃથ્વી",
    jal: "જલ",
    agni: "અગ્નિ",
    vayu: "વાયુ",
    akash: "આકાશ",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::English => &ENGLISH,
            Language::Gujarati => &GUJARATI,
        }
    }

    pub fn phase(&self, phase: Phase) -> &'static str {
        match phase {
            Phase::Left => self.left,
            Phase::Right => self.right,
        }
    }

    pub fn tattva(&self, tattva: Tattva) -> &'static str {
        match tattva {
            Tattva::Prithvi => self.prithvi,
            Tattva::Jal => self.jal,
            Tattva::Agni => self.agni,
            Tattva::Vayu => self.vayu,
            Tattva::Akash => self.akash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swar_base::{ALL_PHASES, ALL_TATTVAS};

    #[test]
    fn every_value_has_text() {
        for lang in [Language::English, Language::Gujarati] {
            let l = Labels::for_language(lang);
            for p in ALL_PHASES {
                assert!(!l.phase(p).is_empty());
            }
            for t in ALL_TATTVAS {
                assert!(!l.tattva(t).is_empty());
            }
        }
    }

    #[test]
    fn english_phase_text() {
        let l = Labels::for_language(Language::English);
        assert_eq!(l.phase(Phase::Left), "Left (Chandra Swar)");
        assert_eq!(l.tattva(Tattva::Vayu), "Vayu (Air)");
    }

    #[test]
    fn languages_differ() {
        let en = Labels::for_language(Language::English);
        let gu = Labels::for_language(Language::Gujarati);
        assert_ne!(en.phase(Phase::Right), gu.phase(Phase::Right));
    }
}
