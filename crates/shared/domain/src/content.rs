use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A registered content type of the host (`post`, `page`, custom types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostType {
    pub name: String,
    pub label: String,
    pub public: bool,
    pub hierarchical: bool,
}

impl PostType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { label: name.clone(), name, public: true, hierarchical: false }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub const fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    #[must_use]
    pub const fn hierarchical(mut self, hierarchical: bool) -> Self {
        self.hierarchical = hierarchical;
        self
    }
}

impl Default for PostType {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// A content record as stored by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub post_type: String,
    #[serde(default = "default_status")]
    pub status: PostStatus,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    /// Last modification, unix seconds.
    #[serde(default)]
    pub modified: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
}

impl Post {
    #[must_use]
    pub fn new(id: u64, post_type: impl Into<String>) -> Self {
        Self {
            id,
            post_type: post_type.into(),
            status: PostStatus::PUBLISH,
            slug: String::new(),
            title: String::new(),
            modified: 0,
            parent: None,
        }
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn modified(mut self, modified: i64) -> Self {
        self.modified = modified;
        self
    }

    #[must_use]
    pub const fn parent(mut self, parent: u64) -> Self {
        self.parent = Some(parent);
        self
    }
}

const fn default_status() -> PostStatus {
    PostStatus::PUBLISH
}

bitflags! {
    /// Publication states. A single post carries one flag; queries carry a set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct PostStatus: u8 {
        const PUBLISH = 1 << 0;
        const FUTURE = 1 << 1;
        const DRAFT = 1 << 2;
        const PENDING = 1 << 3;
        const PRIVATE = 1 << 4;
        const TRASH = 1 << 5;

        const ANY = Self::PUBLISH.bits()
            | Self::FUTURE.bits()
            | Self::DRAFT.bits()
            | Self::PENDING.bits()
            | Self::PRIVATE.bits();
    }
}

impl From<&str> for PostStatus {
    fn from(s: &str) -> Self {
        match s {
            "publish" => Self::PUBLISH,
            "future" => Self::FUTURE,
            "draft" => Self::DRAFT,
            "pending" => Self::PENDING,
            "private" => Self::PRIVATE,
            "trash" => Self::TRASH,
            "any" => Self::ANY,
            _ => Self::empty(),
        }
    }
}

impl PostStatus {
    /// Host names of the contained flags, in declaration order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [
            (Self::PUBLISH, "publish"),
            (Self::FUTURE, "future"),
            (Self::DRAFT, "draft"),
            (Self::PENDING, "pending"),
            (Self::PRIVATE, "private"),
            (Self::TRASH, "trash"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

impl Serialize for PostStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let names = self.names();
        match names.as_slice() {
            [single] => serializer.serialize_str(single),
            _ => names.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PostStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::One(name) => Self::from(name.as_str()),
            Raw::Many(names) => {
                names.iter().fold(Self::empty(), |acc, name| acc | Self::from(name.as_str()))
            },
        };

        if parsed.is_empty() {
            return Err(serde::de::Error::custom("unknown post status"));
        }
        Ok(parsed)
    }
}

/// What the site front page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowOnFront {
    /// The latest posts; the home URL has no page record of its own.
    #[default]
    Posts,
    /// A static page.
    Page,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_parses_single_and_lists() {
        let single: PostStatus = serde_json::from_value(json!("draft")).unwrap();
        assert_eq!(single, PostStatus::DRAFT);

        let many: PostStatus = serde_json::from_value(json!(["publish", "private"])).unwrap();
        assert_eq!(many, PostStatus::PUBLISH | PostStatus::PRIVATE);

        assert!(serde_json::from_value::<PostStatus>(json!("deleted")).is_err());
    }

    #[test]
    fn status_serializes_by_name() {
        assert_eq!(serde_json::to_value(PostStatus::PUBLISH).unwrap(), json!("publish"));
        assert_eq!(
            serde_json::to_value(PostStatus::PUBLISH | PostStatus::FUTURE).unwrap(),
            json!(["publish", "future"])
        );
    }

    #[test]
    fn post_defaults_to_published() {
        let post: Post = serde_json::from_value(json!({ "id": 7, "post_type": "page" })).unwrap();
        assert_eq!(post.status, PostStatus::PUBLISH);
        assert!(post.parent.is_none());
    }

    #[test]
    fn post_type_label_defaults_to_name() {
        let kind = PostType::new("product");
        assert_eq!(kind.label, "product");
        assert!(kind.public);
    }
}
