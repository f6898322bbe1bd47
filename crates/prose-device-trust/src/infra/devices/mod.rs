// prose-core-client/prose-device-trust
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_device_trust_service::InMemoryDeviceTrustService;

mod in_memory_device_trust_service;
