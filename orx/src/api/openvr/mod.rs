mod runtime;

use orx_api::{VRRuntime, VRRuntimeCreator};

pub struct OpenVRRuntimeCreator;

impl OpenVRRuntimeCreator {
    pub fn new() -> Box<dyn VRRuntimeCreator> {
        Box::new(OpenVRRuntimeCreator)
    }
}

impl VRRuntimeCreator for OpenVRRuntimeCreator {
     fn new_runtime(&self) -> Box<dyn VRRuntime> {
         Box::new(runtime::OpenVRRuntime::new())
     }
}
