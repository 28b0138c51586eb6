//! Media type table and decoded response structures

macro_rules! media_types {
    ($($variant:ident = $code:literal => $label:literal,)+) => {
        /// Media classes reported by the storage stack, covering both the
        /// `MEDIA_TYPE` and `STORAGE_MEDIA_TYPE` code ranges.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u32)]
        pub enum MediaType {
            $($variant = $code,)+
        }

        impl MediaType {
            /// Every known media type, in code order
            pub const ALL: &'static [MediaType] = &[$(MediaType::$variant,)+];

            /// Convert from a raw media type code; codes outside the table are `Unknown`
            pub fn from_code(code: u32) -> Self {
                match code {
                    $($code => MediaType::$variant,)+
                    _ => MediaType::Unknown,
                }
            }

            pub fn code(&self) -> u32 {
                *self as u32
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(MediaType::$variant => $label,)+
                }
            }
        }
    };
}

media_types! {
    Unknown = 0 => "Unknown",
    F5_1Pt2_512 = 1 => "F5_1Pt2_512",
    F3_1Pt44_512 = 2 => "F3_1Pt44_512",
    F3_2Pt88_512 = 3 => "F3_2Pt88_512",
    F3_20Pt8_512 = 4 => "F3_20Pt8_512",
    F3_720_512 = 5 => "F3_720_512",
    F5_360_512 = 6 => "F5_360_512",
    F5_320_512 = 7 => "F5_320_512",
    F5_320_1024 = 8 => "F5_320_1024",
    F5_180_512 = 9 => "F5_180_512",
    F5_160_512 = 10 => "F5_160_512",
    RemovableMedia = 11 => "RemovableMedia",
    FixedMedia = 12 => "FixedMedia",
    F3_120M_512 = 13 => "F3_120M_512",
    F3_640_512 = 14 => "F3_640_512",
    F5_640_512 = 15 => "F5_640_512",
    F5_720_512 = 16 => "F5_720_512",
    F3_1Pt2_512 = 17 => "F3_1Pt2_512",
    F3_1Pt23_1024 = 18 => "F3_1Pt23_1024",
    F5_1Pt23_1024 = 19 => "F5_1Pt23_1024",
    F3_128Mb_512 = 20 => "F3_128Mb_512",
    F3_230Mb_512 = 21 => "F3_230Mb_512",
    F8_256_128 = 22 => "F8_256_128",
    F3_200Mb_512 = 23 => "F3_200Mb_512",
    F3_240M_512 = 24 => "F3_240M_512",
    F3_32M_512 = 25 => "F3_32M_512",
    DDS_4mm = 32 => "DDS_4mm",
    MiniQic = 33 => "MiniQic",
    Travan = 34 => "Travan",
    QIC = 35 => "QIC",
    MP_8mm = 36 => "MP_8mm",
    AME_8mm = 37 => "AME_8mm",
    AIT1_8mm = 38 => "AIT1_8mm",
    DLT = 39 => "DLT",
    NCTP = 40 => "NCTP",
    IBM_3480 = 41 => "IBM_3480",
    IBM_3490E = 42 => "IBM_3490E",
    IBM_Magstar_3590 = 43 => "IBM_Magstar_3590",
    IBM_Magstar_MP = 44 => "IBM_Magstar_MP",
    STK_DATA_D3 = 45 => "STK_DATA_D3",
    SONY_DTF = 46 => "SONY_DTF",
    DV_6mm = 47 => "DV_6mm",
    DMI = 48 => "DMI",
    SONY_D2 = 49 => "SONY_D2",
    CLEANER_CARTRIDGE = 50 => "CLEANER_CARTRIDGE",
    CD_ROM = 51 => "CD_ROM",
    CD_R = 52 => "CD_R",
    CD_RW = 53 => "CD_RW",
    DVD_ROM = 54 => "DVD_ROM",
    DVD_R = 55 => "DVD_R",
    DVD_RW = 56 => "DVD_RW",
    MO_3_RW = 57 => "MO_3_RW",
    MO_5_WO = 58 => "MO_5_WO",
    MO_5_RW = 59 => "MO_5_RW",
    MO_5_LIMDOW = 60 => "MO_5_LIMDOW",
    PC_5_WO = 61 => "PC_5_WO",
    PC_5_RW = 62 => "PC_5_RW",
    PD_5_RW = 63 => "PD_5_RW",
    ABL_5_WO = 64 => "ABL_5_WO",
    PINNACLE_APEX_5_RW = 65 => "PINNACLE_APEX_5_RW",
    SONY_12_WO = 66 => "SONY_12_WO",
    PHILIPS_12_WO = 67 => "PHILIPS_12_WO",
    HITACHI_12_WO = 68 => "HITACHI_12_WO",
    CYGNET_12_WO = 69 => "CYGNET_12_WO",
    KODAK_14_WO = 70 => "KODAK_14_WO",
    MO_NFR_525 = 71 => "MO_NFR_525",
    NIKON_12_RW = 72 => "NIKON_12_RW",
    IOMEGA_ZIP = 73 => "IOMEGA_ZIP",
    IOMEGA_JAZ = 74 => "IOMEGA_JAZ",
    SYQUEST_EZ135 = 75 => "SYQUEST_EZ135",
    SYQUEST_EZFLYER = 76 => "SYQUEST_EZFLYER",
    SYQUEST_SYJET = 77 => "SYQUEST_SYJET",
    AVATAR_F2 = 78 => "AVATAR_F2",
    MP2_8mm = 79 => "MP2_8mm",
    DST_S = 80 => "DST_S",
    DST_M = 81 => "DST_M",
    DST_L = 82 => "DST_L",
    VXATape_1 = 83 => "VXATape_1",
    VXATape_2 = 84 => "VXATape_2",
    STK_9840 = 85 => "STK_9840",
    LTO_Ultrium = 86 => "LTO_Ultrium",
    LTO_Accelis = 87 => "LTO_Accelis",
    DVD_RAM = 88 => "DVD_RAM",
    AIT_8mm = 89 => "AIT_8mm",
    ADR_1 = 90 => "ADR_1",
    ADR_2 = 91 => "ADR_2",
    STK_9940 = 92 => "STK_9940",
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Decoded `DISK_GEOMETRY` (IOCTL_DISK_GET_DRIVE_GEOMETRY output)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskGeometry {
    pub cylinders: i64,
    pub media_type_code: u32,
    pub tracks_per_cylinder: u32,
    pub sectors_per_track: u32,
    pub bytes_per_sector: u32,
}

impl DiskGeometry {
    pub fn media_type(&self) -> MediaType {
        MediaType::from_code(self.media_type_code)
    }
}

/// One `DEVICE_MEDIA_INFO` record, read with the disk/removable-disk layout.
///
/// Tape devices use a different union member with the media type at offset 0;
/// that layout is not decoded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceMediaInfo {
    pub cylinders: i64,
    pub media_type_code: u32,
    pub tracks_per_cylinder: u32,
    pub sectors_per_track: u32,
    pub bytes_per_sector: u32,
    pub number_media_sides: u32,
    pub media_characteristics: u32,
}

impl DeviceMediaInfo {
    pub fn media_type(&self) -> MediaType {
        MediaType::from_code(self.media_type_code)
    }
}

/// Decoded `GET_MEDIA_TYPES` (IOCTL_STORAGE_GET_MEDIA_TYPES_EX output)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTypesResponse {
    pub device_type: u32,
    pub media_info: Vec<DeviceMediaInfo>,
}

impl MediaTypesResponse {
    pub fn media_types(&self) -> impl Iterator<Item = MediaType> + '_ {
        self.media_info.iter().map(DeviceMediaInfo::media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_resolve_to_documented_labels() {
        let expected = [
            (0, "Unknown"),
            (1, "F5_1Pt2_512"),
            (11, "RemovableMedia"),
            (12, "FixedMedia"),
            (25, "F3_32M_512"),
            (32, "DDS_4mm"),
            (51, "CD_ROM"),
            (54, "DVD_ROM"),
            (73, "IOMEGA_ZIP"),
            (86, "LTO_Ultrium"),
            (88, "DVD_RAM"),
            (92, "STK_9940"),
        ];
        for (code, label) in expected {
            assert_eq!(MediaType::from_code(code).label(), label, "code {}", code);
        }
    }

    #[test]
    fn test_table_codes_round_trip() {
        assert_eq!(MediaType::ALL.len(), 87);
        for media_type in MediaType::ALL {
            assert_eq!(MediaType::from_code(media_type.code()), *media_type);
        }
    }

    #[test]
    fn test_gap_and_out_of_range_codes_are_unknown() {
        for code in [26, 27, 30, 31, 93, 0x100, u32::MAX, -1i32 as u32] {
            assert_eq!(MediaType::from_code(code), MediaType::Unknown, "code {}", code);
            assert_eq!(MediaType::from_code(code).label(), "Unknown");
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(MediaType::LTO_Accelis.to_string(), "LTO_Accelis");
    }
}
