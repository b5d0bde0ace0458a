use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKey {
    Shikiji,
    Shukuji,
    Chouji,
    Souji,
    Touji,
    Kanreki,
    JigyouAisatsu,
    PtaAisatsu,
    Kanchouji,
    ShuninAisatsu,
    Blank,
}

/// A ready-made speech skeleton that replaces the whole document when loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub key: TemplateKey,
    pub label: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}

impl TemplateKey {
    pub fn all() -> &'static [TemplateKey] {
        &[
            Self::Shikiji,
            Self::Shukuji,
            Self::Chouji,
            Self::Souji,
            Self::Touji,
            Self::Kanreki,
            Self::JigyouAisatsu,
            Self::PtaAisatsu,
            Self::Kanchouji,
            Self::ShuninAisatsu,
            Self::Blank,
        ]
    }

    /// The snake_case key used in persisted records and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shikiji => "shikiji",
            Self::Shukuji => "shukuji",
            Self::Chouji => "chouji",
            Self::Souji => "souji",
            Self::Touji => "touji",
            Self::Kanreki => "kanreki",
            Self::JigyouAisatsu => "jigyou_aisatsu",
            Self::PtaAisatsu => "pta_aisatsu",
            Self::Kanchouji => "kanchouji",
            Self::ShuninAisatsu => "shunin_aisatsu",
            Self::Blank => "blank",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == key)
    }

    pub fn template(&self) -> Template {
        let (label, description, content) = match self {
            Self::Shikiji => (
                "式辞",
                "式典の主催者による挨拶",
                "式辞\n\n　本日ここに、多数のご来賓の皆様のご臨席を賜り、盛大に式典を挙行できますことを、心より御礼申し上げます。\n\n　結びに、皆様のご健勝とご多幸を祈念いたしまして、式辞といたします。\n\n令和　年　月　日\n",
            ),
            Self::Shukuji => (
                "祝辞",
                "来賓としてのお祝いの言葉",
                "祝辞\n\n　本日はまことにおめでとうございます。心よりお祝い申し上げます。\n\n　皆様の今後ますますのご活躍をお祈り申し上げ、お祝いの言葉といたします。\n\n令和　年　月　日\n",
            ),
            Self::Chouji => (
                "弔辞",
                "故人への追悼の言葉",
                "弔辞\n\n　謹んで御霊前に申し上げます。\n\n　在りし日のお姿を偲び、心より御冥福をお祈り申し上げます。\n\n令和　年　月　日\n",
            ),
            Self::Souji => (
                "送辞",
                "在校生から卒業生へ贈る言葉",
                "送辞\n\n　卒業生の皆様、ご卒業おめでとうございます。\n\n　皆様の前途に幸多からんことを祈り、送辞といたします。\n\n令和　年　月　日\n在校生代表\n",
            ),
            Self::Touji => (
                "答辞",
                "卒業生から在校生への返礼",
                "答辞\n\n　本日は私たち卒業生のために、このような式を挙げていただき、ありがとうございます。\n\n　母校のますますの発展を祈り、答辞といたします。\n\n令和　年　月　日\n卒業生代表\n",
            ),
            Self::Kanreki => (
                "還暦祝い",
                "還暦を迎えた方への祝いの言葉",
                "還暦のお祝い\n\n　還暦を迎えられましたこと、心よりお祝い申し上げます。\n\n　これからも健やかに、実り多き日々を重ねられますようお祈り申し上げます。\n",
            ),
            Self::JigyouAisatsu => (
                "事業挨拶",
                "事業の開始や節目の挨拶",
                "ご挨拶\n\n　平素より格別のご高配を賜り、厚く御礼申し上げます。\n\n　今後とも変わらぬご支援を賜りますよう、よろしくお願い申し上げます。\n",
            ),
            Self::PtaAisatsu => (
                "PTA挨拶",
                "PTA会長・役員の挨拶",
                "PTA会長挨拶\n\n　保護者の皆様には、日頃よりPTA活動にご理解とご協力をいただき、感謝申し上げます。\n\n　子どもたちの健やかな成長のため、引き続きよろしくお願いいたします。\n",
            ),
            Self::Kanchouji => (
                "感謝状",
                "功績をたたえる感謝の言葉",
                "感謝状\n\n　あなたは永年にわたり多大なご尽力をいただきました。\n\n　ここにその功績をたたえ、深く感謝の意を表します。\n\n令和　年　月　日\n",
            ),
            Self::ShuninAisatsu => (
                "就任挨拶",
                "新しい役職に就く際の挨拶",
                "就任のご挨拶\n\n　このたび、就任いたしました。身に余る大役ではございますが、精一杯努めてまいります。\n\n　皆様のご指導ご鞭撻のほど、よろしくお願い申し上げます。\n",
            ),
            Self::Blank => ("白紙", "何も書かれていない原稿", ""),
        };

        Template {
            key: *self,
            label,
            description,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_str() {
        for key in TemplateKey::all() {
            assert_eq!(TemplateKey::parse(key.as_str()), Some(*key));
        }
        assert_eq!(TemplateKey::parse("nonexistent"), None);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&TemplateKey::JigyouAisatsu).unwrap();
        assert_eq!(json, "\"jigyou_aisatsu\"");
    }

    #[test]
    fn test_blank_is_empty() {
        let blank = TemplateKey::Blank.template();
        assert!(blank.content.is_empty());
        assert_eq!(blank.key, TemplateKey::Blank);
    }

    #[test]
    fn test_speech_templates_have_content() {
        for key in TemplateKey::all().iter().filter(|k| **k != TemplateKey::Blank) {
            let t = key.template();
            assert!(!t.content.is_empty(), "{} should have content", key.as_str());
            assert!(!t.label.is_empty());
        }
    }
}
