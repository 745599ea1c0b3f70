// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashgate
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use hashgate::gate::app;

fn main() {
	std::process::exit(app::run());
}
