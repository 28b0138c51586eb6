// Device control codes, CTL_CODE(DeviceType, Function, METHOD_BUFFERED, FILE_ANY_ACCESS)
pub const IOCTL_DISK_GET_DRIVE_GEOMETRY: u32 = 0x0007_0000;
pub const IOCTL_STORAGE_GET_MEDIA_TYPES_EX: u32 = 0x002D_0C04;

// Output buffer sizes handed to DeviceIoControl
pub const DISK_GEOMETRY_LEN: usize = 24;
pub const MEDIA_TYPES_BUFFER_LEN: usize = 2048;

// DISK_GEOMETRY field offsets
pub mod disk_geometry {
    pub const CYLINDERS: usize = 0;
    pub const MEDIA_TYPE: usize = 8;
    pub const TRACKS_PER_CYLINDER: usize = 12;
    pub const SECTORS_PER_TRACK: usize = 16;
    pub const BYTES_PER_SECTOR: usize = 20;
}

// GET_MEDIA_TYPES header and DEVICE_MEDIA_INFO (disk layout) offsets
pub mod media_types {
    pub const DEVICE_TYPE: usize = 0;
    pub const MEDIA_INFO_COUNT: usize = 4;
    pub const FIRST_RECORD: usize = 8;
    pub const RECORD_LEN: usize = 32;

    pub const CYLINDERS: usize = 0;
    pub const MEDIA_TYPE: usize = 8;
    pub const TRACKS_PER_CYLINDER: usize = 12;
    pub const SECTORS_PER_TRACK: usize = 16;
    pub const BYTES_PER_SECTOR: usize = 20;
    pub const NUMBER_MEDIA_SIDES: usize = 24;
    pub const MEDIA_CHARACTERISTICS: usize = 28;
}

// Device types reported in the GET_MEDIA_TYPES header
pub const FILE_DEVICE_CD_ROM: u32 = 0x02;
pub const FILE_DEVICE_DISK: u32 = 0x07;
pub const FILE_DEVICE_DVD: u32 = 0x33;
pub const FILE_DEVICE_TAPE: u32 = 0x1F;
