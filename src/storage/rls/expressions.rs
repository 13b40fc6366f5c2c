//! Policy expressions
//!
//! Expressions are trusted SQL fragments. Composition only joins text; it
//! never inspects or escapes it.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A boolean SQL expression used in a policy's `USING` clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyExpression(Cow<'static, str>);

impl PolicyExpression {
    /// Caller's JWT carries the admin role
    pub const ADMIN_ALL: Self = Self::from_static("auth.jwt() ->> 'role' = 'admin'");

    /// Row belongs to the caller
    pub const OWN_RECORDS: Self = Self::from_static("auth.uid() = user_id");

    /// Dosen teaching the row's course
    pub const DOSEN_OWN_COURSES: Self = Self::from_static(
        "auth.jwt() ->> 'role' = 'dosen' AND EXISTS (SELECT 1 FROM mata_kuliah \
         WHERE mata_kuliah.dosen_id = auth.uid() AND mata_kuliah.id = mata_kuliah_id)",
    );

    /// Any laboran
    pub const LABORAN_LAB_ACCESS: Self = Self::from_static("auth.jwt() ->> 'role' = 'laboran'");

    /// Mahasiswa reading their own row
    pub const MAHASISWA_READ_OWN: Self =
        Self::from_static("auth.jwt() ->> 'role' = 'mahasiswa' AND auth.uid() = user_id");

    pub const PUBLIC_READ: Self = Self::from_static("true");

    pub const AUTHENTICATED_ONLY: Self = Self::from_static("auth.uid() IS NOT NULL");

    pub const fn from_static(sql: &'static str) -> Self {
        Self(Cow::Borrowed(sql))
    }

    /// Wrap an arbitrary trusted fragment
    pub fn raw(sql: impl Into<Cow<'static, str>>) -> Self {
        Self(sql.into())
    }

    /// `self OR other`, without added parentheses
    pub fn or(self, other: impl Into<PolicyExpression>) -> Self {
        Self(Cow::Owned(format!("{} OR {}", self.0, other.into().0)))
    }

    /// `self AND other`, without added parentheses
    pub fn and(self, other: impl Into<PolicyExpression>) -> Self {
        Self(Cow::Owned(format!("{} AND {}", self.0, other.into().0)))
    }

    /// `(self)`
    pub fn grouped(self) -> Self {
        Self(Cow::Owned(format!("({})", self.0)))
    }

    /// Join with `OR`; `None` for an empty input
    pub fn any_of<I>(expressions: I) -> Option<Self>
    where
        I: IntoIterator<Item = PolicyExpression>,
    {
        expressions.into_iter().reduce(|acc, next| acc.or(next))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PolicyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for PolicyExpression {
    fn from(sql: &'static str) -> Self {
        Self::from_static(sql)
    }
}

impl From<String> for PolicyExpression {
    fn from(sql: String) -> Self {
        Self(Cow::Owned(sql))
    }
}
