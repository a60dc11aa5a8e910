//! Templated question responder.
//!
//! The responder performs no retrieval or model inference: it interpolates
//! the visitor's question into a fixed guidance text, pointing the reader at
//! the Teachings and FAQ sections and at their spiritual father for
//! personalized counsel. The template exists in both content languages.

use crate::i18n::Language;

/// Build the guidance answer for a question.
///
/// Callers must reject empty questions before calling; the template assumes
/// a non-empty question to quote back.
pub fn answer_for(question: &str, language: Language) -> String {
    if language == Language::AMHARIC {
        format!(
            "ስለ \"{question}\" ለጠየቁት ጥያቄ እናመሰግናለን።\n\n\
በኢትዮጵያ ኦርቶዶክስ ተዋሕዶ ቤተክርስቲያን ትምህርት መሠረት ይህ ጥንቃቄ የሚፈልግ መንፈሳዊ ጉዳይ ነው።\n\n\
ለእርስዎ መንፈሳዊ ጉዞ የተለየ ምክር ለማግኘት የንስሐ አባትዎን ወይም ካህን እንዲያማክሩ እንመክራለን። \
ተዛማጅ ትምህርቶችን በቅዱሳን ትምህርቶች ክፍል ውስጥ ማግኘት ይችላሉ።\n\n\
ለፈጣን ማጣቀሻ ስለ ኦርቶዶክስ እምነትና ሥርዓት ብዙ የተለመዱ ጥያቄዎች መልስ የያዘውን \
የጥያቄና መልስ ክፍላችንን ይመልከቱ።\n\n\
እግዚአብሔር በመንፈሳዊ ጉዞዎ ይባርክዎት።",
            question = question
        )
    } else {
        format!(
            "Thank you for your question about \"{question}\".\n\n\
Based on Ethiopian Orthodox Tewahedo Church teachings, this is an important \
spiritual matter that requires careful consideration.\n\n\
I recommend consulting with your spiritual father or priest for personalized \
guidance, as they can provide counsel specific to your spiritual journey. You \
may also find relevant teachings in our Sacred Teachings section.\n\n\
For immediate reference, please explore our FAQ section which contains answers \
to many common questions about Orthodox faith and practice.\n\n\
May God bless you in your spiritual journey.",
            question = question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_quotes_the_question() {
        let answer = answer_for("Why do we fast?", Language::ENGLISH);
        assert!(answer.contains("\"Why do we fast?\""));
        assert!(answer.contains("Sacred Teachings"));
        assert!(answer.contains("FAQ"));
    }

    #[test]
    fn test_amharic_answer_quotes_the_question() {
        let answer = answer_for("ለምን እንጾማለን?", Language::AMHARIC);
        assert!(answer.contains("\"ለምን እንጾማለን?\""));
        assert!(answer.contains("እግዚአብሔር"));
    }

    #[test]
    fn test_answer_is_deterministic() {
        let a = answer_for("Why?", Language::ENGLISH);
        let b = answer_for("Why?", Language::ENGLISH);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_language_uses_english_template() {
        let lang = Language::from_code_or_canonical("fr");
        let answer = answer_for("Why?", lang);
        assert!(answer.starts_with("Thank you"));
    }
}
