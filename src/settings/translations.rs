//! Static translation tables
//!
//! A fixed string lookup per language, nothing more. Keys cover the tab
//! labels and the welcome banner.

use super::Language;

/// Translated UI strings for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub welcome: &'static str,
    pub home: &'static str,
    pub learn: &'static str,
    pub protect: &'static str,
    pub calculate: &'static str,
    pub profile: &'static str,
}

const ENGLISH: Translations = Translations {
    welcome: "Welcome to PaisaGuru",
    home: "Home",
    learn: "Learn",
    protect: "Protect",
    calculate: "Calculate",
    profile: "Profile",
};

const HINDI: Translations = Translations {
    welcome: "पैसागुरु में आपका स्वागत है",
    home: "होम",
    learn: "सीखें",
    protect: "सुरक्षा",
    calculate: "गणना",
    profile: "प्रोफ़ाइल",
};

const PUNJABI: Translations = Translations {
    welcome: "ਪੈਸਾਗੁਰੂ ਵਿੱਚ ਤੁਹਾਡਾ ਸੁਆਗਤ ਹੈ",
    home: "ਘਰ",
    learn: "ਸਿੱਖੋ",
    protect: "ਸੁਰੱਖਿਆ",
    calculate: "ਗਣਨਾ",
    profile: "ਪ੍ਰੋਫਾਈਲ",
};

/// Translation table for a language
pub fn for_language(language: Language) -> &'static Translations {
    match language {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
        Language::Punjabi => &PUNJABI,
    }
}
