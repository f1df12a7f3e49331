// SPDX-License-Identifier: MPL-2.0
pub mod track_lock;

pub use track_lock::track_lock;
