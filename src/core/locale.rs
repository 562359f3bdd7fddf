use crate::config::defaults::DEFAULT_LANG;
use crate::domain::model::LocaleInfo;

impl LocaleInfo {
    /// Value for the html `lang` attribute.
    pub fn html_lang(&self) -> &str {
        if self.lang.trim().is_empty() {
            DEFAULT_LANG
        } else {
            &self.lang
        }
    }

    /// Tags for date and number formatting; `None` means the runtime default.
    pub fn format_tags(&self) -> Option<&[String]> {
        if self.lang_tag.is_empty() {
            None
        } else {
            Some(&self.lang_tag)
        }
    }

    pub fn primary_tag(&self) -> Option<&str> {
        self.lang_tag.first().map(String::as_str)
    }
}
