// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use smol_str::SmolStr;

/// An opaque commit identifier.
///
/// Layout compares hashes by equality only; no format is enforced, so
/// abbreviated hashes and test-fixture names work the same as full ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitHash(SmolStr);

impl CommitHash {
    pub fn new(value: impl Into<SmolStr>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommitHash {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for CommitHash {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// One commit as supplied by the history provider.
///
/// `hash` and `parents` drive layout; the remaining metadata is opaque to the
/// engine and only carried through for the presentation layer. The sequence
/// consumed by the engine must list every parent strictly after its child, or
/// not at all (a truncated history window).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    hash: CommitHash,
    #[serde(default)]
    parents: SmallVec<[CommitHash; 2]>,
    #[serde(default)]
    author: String,
    #[serde(default)]
    timestamp: i64,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    refs: Vec<String>,
}

impl CommitRecord {
    pub fn new(hash: CommitHash, parents: impl IntoIterator<Item = CommitHash>) -> Self {
        Self {
            hash,
            parents: parents.into_iter().collect(),
            author: String::new(),
            timestamp: 0,
            subject: String::new(),
            refs: Vec::new(),
        }
    }

    pub fn hash(&self) -> &CommitHash {
        &self.hash
    }

    pub fn parents(&self) -> &[CommitHash] {
        &self.parents
    }

    /// True for a commit with no parents in the visible window.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// True for a commit with two or more parents.
    pub fn is_merge(&self) -> bool {
        self.parents.len() >= 2
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = timestamp;
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn refs(&self) -> &[String] {
        &self.refs
    }

    pub fn set_refs(&mut self, refs: Vec<String>) {
        self.refs = refs;
    }
}

/// Parses a full commit sequence from the provider's JSON record array.
///
/// Only `hash` is required per record; `parents` and all metadata fields
/// default when absent.
pub fn commits_from_json_str(json: &str) -> Result<Vec<CommitRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
