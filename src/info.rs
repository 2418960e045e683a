use crate::refs::ObjectReferences;
use chrono::{Datelike, NaiveDate};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// General document metatdata such as title, author, etc
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords for the document. No prescribed format, though Adobe Acrobat suggests
    /// using a comma separated list of keywords
    pub keywords: Option<String>,
    /// The application that created the original content
    pub creator: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub modification_date: Option<NaiveDate>,
}

impl Default for Info {
    /// The fixed metadata stamped on every generated document
    fn default() -> Self {
        let creation_date = NaiveDate::from_ymd_opt(2019, 12, 6);
        Info {
            title: Some("图片转换PDF".to_string()),
            author: Some("章三".to_string()),
            subject: Some("主题哦".to_string()),
            keywords: Some("hi, my pdf!".to_string()),
            creator: Some("PDF Examples".to_string()),
            creation_date,
            modification_date: creation_date.and_then(|d| d.succ_opt()),
        }
    }
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn empty() -> Info {
        Info {
            title: None,
            author: None,
            subject: None,
            keywords: None,
            creator: None,
            creation_date: None,
            modification_date: None,
        }
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the author of the info block, modifying `self`
    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the keywords of the info block, modifying `self`
    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Set the creator of the info block, modifying `self`
    pub fn creator<S: ToString>(&mut self, creator: S) -> &mut Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Set the creation date, and the modification date to the day after
    pub fn created_on(&mut self, date: NaiveDate) -> &mut Self {
        self.creation_date = Some(date);
        self.modification_date = date.succ_opt();
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen();
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        if let Some(creator) = &self.creator {
            info.creator(TextStr(creator.as_str()));
        }
        info.producer(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        if let Some(date) = self.creation_date {
            info.creation_date(pdf_date(date));
        }
        if let Some(date) = self.modification_date {
            info.modified_date(pdf_date(date));
        }
    }
}

fn pdf_date(date: NaiveDate) -> PDate {
    PDate::new(date.year() as u16)
        .month(date.month() as u8)
        .day(date.day() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dates_are_consecutive_days() {
        let info = Info::default();
        assert_eq!(info.creation_date, NaiveDate::from_ymd_opt(2019, 12, 6));
        assert_eq!(info.modification_date, NaiveDate::from_ymd_opt(2019, 12, 7));
    }

    #[test]
    fn created_on_rolls_over_month_end() {
        let mut info = Info::empty();
        info.created_on(NaiveDate::from_ymd_opt(2019, 12, 31).unwrap());
        assert_eq!(info.modification_date, NaiveDate::from_ymd_opt(2020, 1, 1));
    }

    #[test]
    fn setters_chain() {
        let info = Info::empty().title("T").author("A").keywords("k").clone();
        assert_eq!(info.title.as_deref(), Some("T"));
        assert_eq!(info.author.as_deref(), Some("A"));
        assert_eq!(info.keywords.as_deref(), Some("k"));
        assert_eq!(info.subject, None);
    }
}
