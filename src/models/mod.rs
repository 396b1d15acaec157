pub mod datacenter;
pub mod disk;
pub mod disk_image;
pub mod operation;
pub mod vm_params;
pub mod vm_record;
pub mod vm_state;

pub use datacenter::{datacenter_label, Datacenter, Located};
pub use disk::Disk;
pub use disk_image::DiskImage;
pub use operation::Operation;
pub use vm_params::{VmCreate, VmFilter, VmUpdate};
pub use vm_record::{Iface, IpAddress, VmRecord};
pub use vm_state::VmState;
