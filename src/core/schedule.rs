use crate::core::ConfigProvider;
use crate::domain::model::SiteInfo;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Front matter fields needed to decide whether and where a post is listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    pub title: String,
    pub slug: String,
    pub pub_datetime: DateTime<Utc>,
    #[serde(default)]
    pub mod_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub draft: bool,
}

impl PostMeta {
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.mod_datetime.unwrap_or(self.pub_datetime)
    }
}

impl SiteInfo {
    pub fn scheduled_post_margin(&self) -> Duration {
        Duration::milliseconds(i64::try_from(self.scheduled_post_margin_ms).unwrap_or(i64::MAX))
    }
}

/// A post counts as published once `now` is within `margin` of its date.
pub fn is_published(pub_datetime: DateTime<Utc>, now: DateTime<Utc>, margin: Duration) -> bool {
    match pub_datetime.checked_sub_signed(margin) {
        Some(threshold) => now > threshold,
        None => true,
    }
}

/// Non-draft posts that are published at `now`, in their original order.
pub fn visible_posts<'a>(
    posts: &'a [PostMeta],
    now: DateTime<Utc>,
    margin: Duration,
) -> Vec<&'a PostMeta> {
    posts
        .iter()
        .filter(|post| !post.draft && is_published(post.pub_datetime, now, margin))
        .collect()
}

/// Visible posts, newest first by modification (or publication) date.
pub fn sorted_posts<'a>(
    config: &impl ConfigProvider,
    posts: &'a [PostMeta],
    now: DateTime<Utc>,
) -> Vec<&'a PostMeta> {
    let mut visible = visible_posts(posts, now, config.site().scheduled_post_margin());
    visible.sort_by(|a, b| b.last_updated().cmp(&a.last_updated()));
    tracing::debug!("{} of {} posts visible", visible.len(), posts.len());
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn future_post_inside_margin_is_published() {
        let now = at(12, 0);
        assert!(is_published(at(12, 10), now, Duration::minutes(15)));
        assert!(!is_published(at(12, 10), now, Duration::minutes(5)));
    }

    #[test]
    fn boundary_is_exclusive() {
        let now = at(12, 0);
        assert!(!is_published(at(12, 15), now, Duration::minutes(15)));
    }

    #[test]
    fn zero_margin_past_post_is_published() {
        assert!(is_published(at(11, 0), at(12, 0), Duration::zero()));
    }

    #[test]
    fn drafts_are_hidden() {
        let posts = vec![PostMeta {
            title: "Draft".to_string(),
            slug: "draft".to_string(),
            pub_datetime: at(8, 0),
            mod_datetime: None,
            draft: true,
        }];
        assert!(visible_posts(&posts, at(12, 0), Duration::minutes(15)).is_empty());
    }

    #[test]
    fn huge_margin_does_not_overflow() {
        let info = SiteInfo {
            scheduled_post_margin_ms: u64::MAX,
            ..SiteInfo::default()
        };
        assert!(is_published(at(23, 0), at(0, 0), info.scheduled_post_margin()));
    }
}
