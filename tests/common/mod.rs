//! Fake container-format registry for exercising the plugin protocol.

use h5blosc::include::blosc::{BLOSC_VERSION_DATE, BLOSC_VERSION_STRING};
use h5blosc::include::blosc_filter::BLOSC_FILTER_REGISTER_OK;
use h5blosc::{FilterRegistry, Registration};

/// One recorded `install_filter` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCall {
    pub filter_id: u32,
    pub flags: u32,
    pub cd_values: Vec<u32>,
}

/// Stand-in for the container format's per-dataset pipeline handle.
#[derive(Debug, Default)]
pub struct FakePipeline {
    pub installed: Vec<InstallCall>,
}

/// Scriptable registry: replies with whatever status it was given.
pub struct FakeRegistry {
    pub register_reply: Registration,
    pub install_status: i32,
}

impl FakeRegistry {
    pub fn healthy() -> Self {
        FakeRegistry {
            register_reply: Registration {
                status: BLOSC_FILTER_REGISTER_OK,
                version: BLOSC_VERSION_STRING.to_string(),
                date: BLOSC_VERSION_DATE.to_string(),
            },
            install_status: 0,
        }
    }

    pub fn failing_registration(status: i32) -> Self {
        FakeRegistry {
            register_reply: Registration {
                status,
                version: String::new(),
                date: String::new(),
            },
            install_status: 0,
        }
    }

    pub fn failing_install(status: i32) -> Self {
        let mut registry = FakeRegistry::healthy();
        registry.install_status = status;
        registry
    }
}

impl FilterRegistry for FakeRegistry {
    type Pipeline = FakePipeline;

    fn register_filter(&self) -> Registration {
        self.register_reply.clone()
    }

    fn install_filter(
        &self,
        pipeline: &mut FakePipeline,
        filter_id: u32,
        flags: u32,
        cd_values: &[u32],
    ) -> i32 {
        if self.install_status == 0 {
            pipeline.installed.push(InstallCall {
                filter_id,
                flags,
                cd_values: cd_values.to_vec(),
            });
        }
        self.install_status
    }
}
