//! KhetBot keyword responder
//!
//! Matches a free-text question against a fixed, ordered keyword table and
//! returns a canned answer in the requested language. Stateless: no chat
//! history, no network calls, no learning.

use crate::types::Language;

/// Topics KhetBot can answer about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTopic {
    PestControl,
    Irrigation,
    Fertilizer,
    CropProtection,
}

/// English keyword table, checked in declared order before the Urdu checks
const ENGLISH_KEYWORDS: &[(&str, ChatTopic)] = &[
    ("pest", ChatTopic::PestControl),
    ("irrigation", ChatTopic::Irrigation),
    ("fertilizer", ChatTopic::Fertilizer),
    ("crop", ChatTopic::CropProtection),
];

/// Match a query to a topic; first matching keyword wins
pub fn match_topic(query: &str) -> Option<ChatTopic> {
    let query = query.to_lowercase();

    for (keyword, topic) in ENGLISH_KEYWORDS {
        if query.contains(keyword) {
            return Some(*topic);
        }
    }

    // Urdu has no case folding; literal substring checks, kept after the
    // full English table to match the original lookup order
    if query.contains("کیڑے") || query.contains("کیٹ") {
        return Some(ChatTopic::PestControl);
    }
    if query.contains("پانی") || query.contains("آبپاشی") {
        return Some(ChatTopic::Irrigation);
    }
    if query.contains("کھاد") {
        return Some(ChatTopic::Fertilizer);
    }

    None
}

/// Answer a free-text question in the requested language
pub fn chatbot_reply(query: &str, language: Language) -> String {
    match match_topic(query) {
        Some(topic) => {
            tracing::debug!(?topic, "chatbot keyword matched");
            topic_response(topic, language).to_string()
        }
        None => fallback_response(language).to_string(),
    }
}

/// Canned response for a matched topic
pub fn topic_response(topic: ChatTopic, language: Language) -> &'static str {
    match (topic, language) {
        (ChatTopic::PestControl, Language::English) => {
            "For pest control:\n\
             1. Inspect your crop every few days\n\
             2. Start with neem oil spray before chemical pesticides\n\
             3. Remove and destroy affected plants\n\
             4. Ask your local agriculture office about approved pesticides"
        }
        (ChatTopic::PestControl, Language::Urdu) => {
            "کیڑوں سے بچاؤ کے لیے:\n\
             1. ہر چند دن بعد فصل کا معائنہ کریں\n\
             2. کیمیائی زہر سے پہلے نیم کے تیل کا چھڑکاؤ آزمائیں\n\
             3. متاثرہ پودے نکال کر تلف کریں\n\
             4. منظور شدہ زہروں کے لیے مقامی زرعی دفتر سے پوچھیں"
        }
        (ChatTopic::Irrigation, Language::English) => {
            "For irrigation:\n\
             1. Water early in the morning or late in the evening\n\
             2. Check soil moisture before watering\n\
             3. Use drip irrigation to save water where possible\n\
             4. Avoid overwatering, it damages roots"
        }
        (ChatTopic::Irrigation, Language::Urdu) => {
            "آبپاشی کے لیے:\n\
             1. صبح سویرے یا شام کو پانی دیں\n\
             2. پانی دینے سے پہلے زمین کی نمی دیکھیں\n\
             3. ممکن ہو تو ڈرپ آبپاشی سے پانی بچائیں\n\
             4. زیادہ پانی دینے سے پرہیز کریں، جڑوں کو نقصان ہوتا ہے"
        }
        (ChatTopic::Fertilizer, Language::English) => {
            "For fertilizer use:\n\
             1. Test your soil before applying fertilizer\n\
             2. Mix organic compost with chemical fertilizer\n\
             3. Apply the recommended dose, more is not better\n\
             4. Water the field after application"
        }
        (ChatTopic::Fertilizer, Language::Urdu) => {
            "کھاد کے استعمال کے لیے:\n\
             1. کھاد ڈالنے سے پہلے زمین کا ٹیسٹ کرائیں\n\
             2. کیمیائی کھاد کے ساتھ نامیاتی کھاد ملائیں\n\
             3. تجویز کردہ مقدار ہی ڈالیں، زیادہ بہتر نہیں\n\
             4. کھاد ڈالنے کے بعد کھیت کو پانی دیں"
        }
        (ChatTopic::CropProtection, Language::English) => {
            "For crop protection:\n\
             1. Rotate crops every season\n\
             2. Use certified seed\n\
             3. Keep the field free of weeds\n\
             4. Watch weather alerts for frost and heat warnings"
        }
        (ChatTopic::CropProtection, Language::Urdu) => {
            "فصل کی حفاظت کے لیے:\n\
             1. ہر موسم میں فصل بدل کر کاشت کریں\n\
             2. تصدیق شدہ بیج استعمال کریں\n\
             3. کھیت کو جڑی بوٹیوں سے صاف رکھیں\n\
             4. کہرے اور گرمی کی وارننگ کے لیے موسمی الرٹ دیکھتے رہیں"
        }
    }
}

/// Response used when no keyword matches
pub fn fallback_response(language: Language) -> &'static str {
    match language {
        Language::English => {
            "I'm here to help. Ask me about pest control, irrigation, fertilizer, or crop protection."
        }
        Language::Urdu => {
            "میں آپ کی مدد کے لیے حاضر ہوں۔ مجھ سے کیڑوں سے بچاؤ، آبپاشی، کھاد یا فصل کی حفاظت کے بارے میں پوچھیں۔"
        }
    }
}
