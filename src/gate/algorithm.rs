// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashgate
// File: algorithm.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! The fixed set of digest algorithms a gate can check against.

use digest::{Digest, DynDigest};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::error::GateError;

macro_rules! create_hasher {
	($alg:expr, $($variant:path => $hasher:expr),+ $(,)?) => {
		match $alg {
			$(
				$variant => Box::new($hasher),
			)+
		}
	};
}

#[derive(
	Debug,
	Clone,
	Copy,
	Default,
	PartialEq,
	Eq,
	Display,
	EnumIter,
	EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Algorithm {
	Md5,
	Sha1,
	#[default]
	Sha256,
	Sha384,
	Sha512,
	/// BLAKE2b with a 512-bit output.
	Blake2b,
}

impl Algorithm {
	/// Resolves a user-supplied name, ignoring ASCII case.
	pub fn from_name(name: &str) -> Result<Self, GateError> {
		name.parse().map_err(|_| GateError::UnsupportedAlgorithm {
			name: name.to_owned(),
		})
	}

	pub fn names() -> Vec<String> {
		Algorithm::iter().map(|alg| alg.to_string()).collect()
	}

	pub fn hasher(&self) -> Box<dyn DynDigest> {
		create_hasher!(self,
			Algorithm::Md5 => md5::Md5::new(),
			Algorithm::Sha1 => sha1::Sha1::new(),
			Algorithm::Sha256 => sha2::Sha256::new(),
			Algorithm::Sha384 => sha2::Sha384::new(),
			Algorithm::Sha512 => sha2::Sha512::new(),
			Algorithm::Blake2b => blake2::Blake2b512::new(),
		)
	}

	pub fn output_len(&self) -> usize {
		match self {
			Algorithm::Md5 => 16,
			Algorithm::Sha1 => 20,
			Algorithm::Sha256 => 32,
			Algorithm::Sha384 => 48,
			Algorithm::Sha512 | Algorithm::Blake2b => 64,
		}
	}

	pub fn digest(&self, data: &[u8]) -> Vec<u8> {
		let mut hasher = self.hasher();
		hasher.update(data);
		hasher.finalize().to_vec()
	}

	/// Lowercase hex rendering of [`Algorithm::digest`].
	pub fn hex_digest(&self, data: &[u8]) -> String {
		hex::encode(self.digest(data))
	}
}
