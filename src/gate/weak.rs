// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashgate
// Module: weak algorithm advisories
// File: weak.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Collision-weak algorithms still accepted for integrity checks. The
//! advisory is only shown on verbose runs so that success stays silent.

use colored::Colorize;

use super::algorithm::Algorithm;

#[derive(Debug, Clone)]
pub struct WeakAlgorithmMetadata {
	pub algorithm: Algorithm,
	pub display_name: &'static str,
	pub replacement_hint: &'static str,
}

const WEAK_ALGORITHMS: &[WeakAlgorithmMetadata] = &[
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Md5,
		display_name: "MD5",
		replacement_hint: "prefer sha256 or blake2b for published checksums",
	},
	WeakAlgorithmMetadata {
		algorithm: Algorithm::Sha1,
		display_name: "SHA-1",
		replacement_hint: "prefer sha256 or sha512 for published checksums",
	},
];

pub fn metadata_for(
	algorithm: Algorithm,
) -> Option<&'static WeakAlgorithmMetadata> {
	WEAK_ALGORITHMS
		.iter()
		.find(|entry| entry.algorithm == algorithm)
}

/// One-line advisory for a weak algorithm, `None` for the others.
pub fn advisory_for(algorithm: Algorithm) -> Option<String> {
	let metadata = metadata_for(algorithm)?;
	Some(format!(
		"{} is collision-weak; a matching digest does not rule out a crafted input ({})",
		metadata.display_name, metadata.replacement_hint
	))
}

pub fn emit_advisory(algorithm: Algorithm) {
	if let Some(advisory) = advisory_for(algorithm) {
		eprintln!("{} {}", "warning:".yellow().bold(), advisory);
	}
}
