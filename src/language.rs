use whatlang::{Lang, detect};

#[cfg(test)]
use mockall::automock;

/// Identifies the language of a headline as an ISO 639-1 code.
///
/// `None` means no language could be identified at all (empty input, digits,
/// bare punctuation). Headlines are short, so no minimum-length or confidence
/// cutoff is applied; the caller decides what an unidentifiable headline
/// means.
#[cfg_attr(test, automock)]
pub trait LanguageDetectorTrait {
    fn detect(&self, text: &str) -> Option<String>;
}

pub struct WhatlangDetector;

impl LanguageDetectorTrait for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let info = detect(text)?;
        Some(lang_to_code(info.lang()))
    }
}

fn lang_to_code(lang: Lang) -> String {
    match lang {
        Lang::Eng => "en".to_string(),
        Lang::Rus => "ru".to_string(),
        Lang::Cmn => "zh".to_string(),
        Lang::Spa => "es".to_string(),
        Lang::Fra => "fr".to_string(),
        Lang::Deu => "de".to_string(),
        Lang::Jpn => "ja".to_string(),
        Lang::Kor => "ko".to_string(),
        Lang::Por => "pt".to_string(),
        Lang::Ita => "it".to_string(),
        Lang::Nld => "nl".to_string(),
        Lang::Pol => "pl".to_string(),
        Lang::Tur => "tr".to_string(),
        Lang::Swe => "sv".to_string(),
        Lang::Dan => "da".to_string(),
        Lang::Fin => "fi".to_string(),
        Lang::Heb => "he".to_string(),
        Lang::Ara => "ar".to_string(),
        Lang::Hin => "hi".to_string(),
        Lang::Tha => "th".to_string(),
        Lang::Vie => "vi".to_string(),
        Lang::Afr => "af".to_string(),
        Lang::Aka => "ak".to_string(),
        Lang::Amh => "am".to_string(),
        Lang::Aze => "az".to_string(),
        Lang::Bel => "be".to_string(),
        Lang::Ben => "bn".to_string(),
        Lang::Bul => "bg".to_string(),
        Lang::Cat => "ca".to_string(),
        Lang::Ces => "cs".to_string(),
        Lang::Ell => "el".to_string(),
        Lang::Epo => "eo".to_string(),
        Lang::Est => "et".to_string(),
        Lang::Guj => "gu".to_string(),
        Lang::Hrv => "hr".to_string(),
        Lang::Hun => "hu".to_string(),
        Lang::Hye => "hy".to_string(),
        Lang::Ind => "id".to_string(),
        Lang::Jav => "jv".to_string(),
        Lang::Kan => "kn".to_string(),
        Lang::Kat => "ka".to_string(),
        Lang::Khm => "km".to_string(),
        Lang::Lat => "la".to_string(),
        Lang::Lav => "lv".to_string(),
        Lang::Lit => "lt".to_string(),
        Lang::Mal => "ml".to_string(),
        Lang::Mar => "mr".to_string(),
        Lang::Mkd => "mk".to_string(),
        Lang::Mya => "my".to_string(),
        Lang::Nep => "ne".to_string(),
        Lang::Nob => "nb".to_string(),
        Lang::Ori => "or".to_string(),
        Lang::Pan => "pa".to_string(),
        Lang::Pes => "fa".to_string(),
        Lang::Ron => "ro".to_string(),
        Lang::Sin => "si".to_string(),
        Lang::Slk => "sk".to_string(),
        Lang::Slv => "sl".to_string(),
        Lang::Sna => "sn".to_string(),
        Lang::Srp => "sr".to_string(),
        Lang::Tam => "ta".to_string(),
        Lang::Tel => "te".to_string(),
        Lang::Tgl => "tl".to_string(),
        Lang::Tuk => "tk".to_string(),
        Lang::Ukr => "uk".to_string(),
        Lang::Urd => "ur".to_string(),
        Lang::Uzb => "uz".to_string(),
        Lang::Yid => "yi".to_string(),
        Lang::Zul => "zu".to_string(),
        // anything whatlang adds later falls back to its raw code
        _ => lang.code().to_string(),
    }
}
