// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashgate
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod gate {
	pub mod algorithm;
	pub mod app;
	pub mod error;
	pub mod pipeline;
	pub mod weak;
}
