//! Static cartridge type table.
//!
//! Entries are listed in detection order: the full-registry autodetection
//! pass takes the first entry of matching size, so plain and XEGS layouts
//! come before vendor-specific boards of the same size.

use super::{
    Banking as B, CartType, DetectFlag as D, HeaderPolicy as H, InitRange as I, SizeClasses,
    System as S, WritableStore as W,
};

/// Historical names kept for lookup only; each shares the id of a main entry
pub(super) static ALIASES: &[(&str, i32)] = &[
    ("Mode_MegaCart_1M_2", 32),
    ("Mode_BountyBob5200Alt", 7),
];

#[allow(clippy::too_many_arguments)]
const fn cart(
    id: i32,
    name: &'static str,
    system: S,
    sizes: SizeClasses,
    store: W,
    banking: B,
    init: I,
    header: H,
    detect: D,
    size: u32,
    description: &'static str,
) -> CartType {
    CartType {
        id,
        name,
        system,
        sizes,
        store,
        banking,
        init,
        header,
        detect,
        size,
        description,
    }
}

pub(super) static CART_TYPES: &[CartType] = &[
    cart(
        0,
        "Mode_None",
        S::Atari800,
        SizeClasses::SIZE_2K,
        W::None,
        B::None,
        I::Bank2K,
        H::Last16B,
        D::None,
        0x0000,
        "No cartridge",
    ),
    cart(
        57,
        "Mode_2K",
        S::Atari800,
        SizeClasses::SIZE_2K,
        W::None,
        B::None,
        I::Bank2K,
        H::Last16B,
        D::None,
        0x0800,
        "2K",
    ),
    cart(
        58,
        "Mode_4K",
        S::Atari800,
        SizeClasses::SIZE_4K,
        W::None,
        B::None,
        I::Bank4K,
        H::Last16B,
        D::None,
        0x1000,
        "4K",
    ),
    cart(
        1,
        "Mode_8K",
        S::Atari800,
        SizeClasses::SIZE_2K.union(SizeClasses::SIZE_4K).union(SizeClasses::SIZE_8K),
        W::None,
        B::None,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x2000,
        "8K",
    ),
    cart(
        2,
        "Mode_16K",
        S::Atari800,
        SizeClasses::SIZE_16K,
        W::None,
        B::None,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x4000,
        "16K",
    ),
    cart(
        12,
        "Mode_XEGS_32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::Data,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x8000,
        "32K XEGS",
    ),
    cart(
        13,
        "Mode_XEGS_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::Data,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x10000,
        "64K XEGS",
    ),
    cart(
        67,
        "Mode_XEGS_64K_Alt",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::Data,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x10000,
        "XEGS 64K (alternate)",
    ),
    cart(
        14,
        "Mode_XEGS_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::Data,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x20000,
        "128K XEGS",
    ),
    cart(
        23,
        "Mode_XEGS_256K",
        S::Atari800,
        SizeClasses::SIZE_256K,
        W::None,
        B::Data,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x40000,
        "256K XEGS",
    ),
    cart(
        24,
        "Mode_XEGS_512K",
        S::Atari800,
        SizeClasses::SIZE_512K,
        W::None,
        B::Data,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x80000,
        "512K XEGS",
    ),
    cart(
        25,
        "Mode_XEGS_1M",
        S::Atari800,
        SizeClasses::SIZE_1M,
        W::None,
        B::Data,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x100000,
        "1M XEGS",
    ),
    cart(
        33,
        "Mode_Switchable_XEGS_32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x8000,
        "32K Switchable XEGS",
    ),
    cart(
        34,
        "Mode_Switchable_XEGS_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x10000,
        "64K Switchable XEGS",
    ),
    cart(
        35,
        "Mode_Switchable_XEGS_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x20000,
        "128K Switchable XEGS",
    ),
    cart(
        36,
        "Mode_Switchable_XEGS_256K",
        S::Atari800,
        SizeClasses::SIZE_256K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x40000,
        "256K Switchable XEGS",
    ),
    cart(
        37,
        "Mode_Switchable_XEGS_512K",
        S::Atari800,
        SizeClasses::SIZE_512K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x80000,
        "512K Switchable XEGS",
    ),
    cart(
        38,
        "Mode_Switchable_XEGS_1M",
        S::Atari800,
        SizeClasses::SIZE_1M,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x100000,
        "1M Switchable XEGS",
    ),
    cart(
        41,
        "Mode_MaxFlash_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::AddressSwitchable,
        I::Bank8K,
        H::First8KPreferAll8K,
        D::None,
        0x20000,
        "MaxFlash 128K / 1Mbit",
    ),
    cart(
        1000,
        "Mode_MaxFlash_128K_MyIDE",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::AddressSwitchable,
        I::Bank8K,
        H::First8KPreferAll8K,
        D::None,
        0x20000,
        "MaxFlash 128K + MyIDE",
    ),
    cart(
        42,
        "Mode_MaxFlash_1024K",
        S::Atari800,
        SizeClasses::SIZE_1M,
        W::None,
        B::AddressSwitchable,
        I::Bank8K,
        H::Last8KPreferAll8K,
        D::None,
        0x100000,
        "MaxFlash 1M / 8Mbit - older (bank 127)",
    ),
    cart(
        75,
        "Mode_MaxFlash_1024K_Bank0",
        S::Atari800,
        SizeClasses::SIZE_256K.union(SizeClasses::SIZE_512K).union(SizeClasses::SIZE_1M),
        W::None,
        B::AddressSwitchable,
        I::Bank8K,
        H::First8KPreferAll8K,
        D::None,
        0x100000,
        "MaxFlash 1M / 8Mbit - newer (bank 0)",
    ),
    cart(
        26,
        "Mode_MegaCart_16K",
        S::Atari800,
        SizeClasses::SIZE_16K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::First16KPreferAll16K,
        D::None,
        0x4000,
        "16K MegaCart",
    ),
    cart(
        27,
        "Mode_MegaCart_32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::First16KPreferAll16K,
        D::None,
        0x8000,
        "32K MegaCart",
    ),
    cart(
        28,
        "Mode_MegaCart_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::First16KPreferAll16K,
        D::None,
        0x10000,
        "64K MegaCart",
    ),
    cart(
        29,
        "Mode_MegaCart_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::First16KPreferAll16K,
        D::None,
        0x20000,
        "128K MegaCart",
    ),
    cart(
        30,
        "Mode_MegaCart_256K",
        S::Atari800,
        SizeClasses::SIZE_256K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::First16KPreferAll16K,
        D::None,
        0x40000,
        "256K MegaCart",
    ),
    cart(
        31,
        "Mode_MegaCart_512K",
        S::Atari800,
        SizeClasses::SIZE_512K,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::First16KPreferAll16K,
        D::None,
        0x80000,
        "512K MegaCart",
    ),
    cart(
        32,
        "Mode_MegaCart_1M",
        S::Atari800,
        SizeClasses::SIZE_1M,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::First16KPreferAll16K,
        D::None,
        0x100000,
        "1M MegaCart",
    ),
    cart(
        64,
        "Mode_MegaCart_2M",
        S::Atari800,
        SizeClasses::SIZE_2M,
        W::None,
        B::DataSwitchable,
        I::Bank16K,
        H::First16KPreferAll16K,
        D::None,
        0x200000,
        "2M MegaCart",
    ),
    cart(
        18,
        "Mode_BountyBob800",
        S::Atari800,
        SizeClasses::SIZE_40K,
        W::None,
        B::Other,
        I::Bank16K,
        H::Last16B,
        D::None,
        0xA000,
        "Bounty Bob (800)",
    ),
    cart(
        3,
        "Mode_OSS_034M",
        S::Atari800,
        SizeClasses::SIZE_16K,
        W::None,
        B::Address,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x4000,
        "OSS '034M'",
    ),
    cart(
        15,
        "Mode_OSS_M091",
        S::Atari800,
        SizeClasses::SIZE_16K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First4K,
        D::None,
        0x4000,
        "OSS 'M091'",
    ),
    cart(
        45,
        "Mode_OSS_043M",
        S::Atari800,
        SizeClasses::SIZE_16K,
        W::None,
        B::Address,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x4000,
        "OSS '043M'",
    ),
    cart(
        44,
        "Mode_OSS_8K",
        S::Atari800,
        SizeClasses::SIZE_8K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First4K,
        D::None,
        0x2000,
        "OSS 8K",
    ),
    cart(
        84,
        "Mode_Corina_1M_EEPROM",
        S::Atari800,
        SizeClasses::SIZE_1M,
        W::Bytes8K,
        B::Data,
        I::Bank8K,
        H::First8K,
        D::None,
        0x102000,
        "Corina 1M + 8K EEPROM",
    ),
    cart(
        85,
        "Mode_Corina_512K_SRAM_EEPROM",
        S::Atari800,
        SizeClasses::SIZE_512K,
        W::Bytes8K,
        B::Data,
        I::Bank8K,
        H::First8K,
        D::None,
        0x82000,
        "Corina 512K + 512K SRAM + 8K EEPROM",
    ),
    cart(
        7,
        "Mode_BountyBob5200",
        S::Atari5200,
        SizeClasses::SIZE_40K,
        W::None,
        B::Other,
        I::Bank32K,
        H::Last16B,
        D::None,
        0xA000,
        "Bounty Bob (5200)",
    ),
    cart(
        76,
        "Mode_Williams_16K",
        S::Atari800,
        SizeClasses::SIZE_16K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First8K,
        D::None,
        0x4000,
        "Williams 16K",
    ),
    cart(
        22,
        "Mode_Williams_32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First8K,
        D::None,
        0x8000,
        "Williams 32K",
    ),
    cart(
        8,
        "Mode_Williams_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First8K,
        D::None,
        0x10000,
        "Williams 64K",
    ),
    cart(
        10,
        "Mode_Diamond_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::AddressD5Dx,
        I::Bank8K,
        H::First8K,
        D::None,
        0x10000,
        "Diamond 64K",
    ),
    cart(
        9,
        "Mode_Express_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::AddressD57x,
        I::Bank8K,
        H::First8K,
        D::None,
        0x10000,
        "Express 64K",
    ),
    cart(
        11,
        "Mode_SpartaDosX_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::AddressD5Ex,
        I::Bank8K,
        H::First8K,
        D::None,
        0x10000,
        "SpartaDOS X 64K",
    ),
    cart(
        43,
        "Mode_SpartaDosX_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::AddressD5EFx,
        I::Bank8K,
        H::First8K,
        D::None,
        0x20000,
        "SpartaDOS X 128K",
    ),
    cart(
        49,
        "Mode_Atrax_SDX_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::AddressD5EFx,
        I::Bank8K,
        H::First8K,
        D::None,
        0x20000,
        "Atrax SDX 128K",
    ),
    cart(
        48,
        "Mode_Atrax_SDX_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::AddressD5Ex,
        I::Bank8K,
        H::First8K,
        D::None,
        0x10000,
        "Atrax SDX 64K",
    ),
    cart(
        78,
        "Mode_TelelinkII",
        S::Atari800,
        SizeClasses::SIZE_8K,
        W::Bytes256,
        B::None,
        I::Bank8K,
        H::First8K,
        D::None,
        0x2100,
        "8K Telelink II",
    ),
    cart(
        59,
        "Mode_RightSlot_4K",
        S::Atari800,
        SizeClasses::SIZE_4K,
        W::None,
        B::None,
        I::RightSlot8K,
        H::Last16B,
        D::None,
        0x1000,
        "Right slot 4K",
    ),
    cart(
        21,
        "Mode_RightSlot_8K",
        S::Atari800,
        SizeClasses::SIZE_8K,
        W::None,
        B::None,
        I::RightSlot8K,
        H::Last16B,
        D::None,
        0x2000,
        "Right slot 8K",
    ),
    cart(
        53,
        "Mode_RightSlot_8K_alt",
        S::Atari800,
        SizeClasses::SIZE_8K,
        W::None,
        B::None,
        I::RightSlot8K,
        H::Last16B,
        D::None,
        0x2000,
        "Right slot 8K (alternative)",
    ),
    cart(
        5,
        "Mode_DB_32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::Address,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x8000,
        "DB 32K",
    ),
    cart(
        17,
        "Mode_Atrax_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::Data,
        I::Bank8K,
        H::First8K,
        D::None,
        0x20000,
        "Atrax 128K (decoded order)",
    ),
    cart(
        68,
        "Mode_Atrax_128K_Raw",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::Data,
        I::Bank8K,
        H::First8K,
        D::DontRecommend,
        0x20000,
        "Atrax 128K (raw order)",
    ),
    cart(
        39,
        "Mode_Phoenix_8K",
        S::Atari800,
        SizeClasses::SIZE_8K,
        W::None,
        B::Any,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x2000,
        "Phoenix 8K",
    ),
    cart(
        60,
        "Mode_Blizzard_32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::Any,
        I::Bank32K,
        H::Last16B,
        D::None,
        0x8000,
        "Blizzard 32K",
    ),
    cart(
        40,
        "Mode_Blizzard_16K",
        S::Atari800,
        SizeClasses::SIZE_16K,
        W::None,
        B::Any,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x4000,
        "Blizzard 16K",
    ),
    cart(
        46,
        "Mode_Blizzard_4K",
        S::Atari800,
        SizeClasses::SIZE_4K,
        W::None,
        B::Any,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x1000,
        "Blizzard 4K",
    ),
    cart(
        54,
        "Mode_SIC_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First16KPreferAll16K,
        D::None,
        0x20000,
        "SIC! 128K",
    ),
    cart(
        55,
        "Mode_SIC_256K",
        S::Atari800,
        SizeClasses::SIZE_256K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First16KPreferAll16K,
        D::None,
        0x40000,
        "SIC! 256K",
    ),
    cart(
        56,
        "Mode_SIC_512K",
        S::Atari800,
        SizeClasses::SIZE_512K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First16KPreferAll16K,
        D::None,
        0x80000,
        "SIC! 512K",
    ),
    cart(
        47,
        "Mode_AST_32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::Any,
        I::Bank8K,
        H::First8K,
        D::None,
        0x8000,
        "AST 32K",
    ),
    cart(
        50,
        "Mode_Turbosoft_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First8K,
        D::None,
        0x10000,
        "Turbosoft 64K",
    ),
    cart(
        51,
        "Mode_Turbosoft_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First8K,
        D::None,
        0x20000,
        "Turbosoft 128K",
    ),
    cart(
        1001,
        "Mode_MegaCart_512K_3",
        S::Atari800,
        SizeClasses::SIZE_512K,
        W::None,
        B::DataSwitchable,
        I::Bank8K,
        H::First8K,
        D::None,
        0x80000,
        "MegaCart 512K (3)",
    ),
    cart(
        63,
        "Mode_MegaCart_4M_3",
        S::Atari800,
        SizeClasses::SIZE_4M,
        W::None,
        B::DataSwitchable,
        I::Bank8K,
        H::Last16B,
        D::None,
        0x400000,
        "MegaCart 4M (3)",
    ),
    cart(
        52,
        "Mode_MicroCalc",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::Any,
        I::Bank8K,
        H::First8K,
        D::None,
        0x8000,
        "MicroCalc 32K",
    ),
    cart(
        61,
        "Mode_MegaMax_2M",
        S::Atari800,
        SizeClasses::SIZE_2M,
        W::None,
        B::Any,
        I::Bank16K,
        H::First16KPreferAll16K,
        D::None,
        0x200000,
        "MegaMax 2M",
    ),
    cart(
        65,
        "Mode_TheCart_32M",
        S::Atari800,
        SizeClasses::SIZE_32M,
        W::None,
        B::Any,
        I::Bank8K,
        H::First8K,
        D::None,
        0x2000000,
        "The!Cart 32M",
    ),
    cart(
        66,
        "Mode_TheCart_64M",
        S::Atari800,
        SizeClasses::SIZE_64M,
        W::None,
        B::Any,
        I::Bank8K,
        H::First8K,
        D::None,
        0x4000000,
        "The!Cart 64M",
    ),
    cart(
        62,
        "Mode_TheCart_128M",
        S::Atari800,
        SizeClasses::SIZE_128M,
        W::None,
        B::Any,
        I::Bank8K,
        H::First8K,
        D::None,
        0x8000000,
        "The!Cart 128M",
    ),
    cart(
        69,
        "Mode_aDawliah_32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::Any,
        I::Bank8K,
        H::First8K,
        D::DontRecommend,
        0x8000,
        "aDawliah 32K",
    ),
    cart(
        70,
        "Mode_aDawliah_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::Any,
        I::Bank8K,
        H::First8K,
        D::DontRecommend,
        0x10000,
        "aDawliah 64K",
    ),
    cart(
        160,
        "Mode_JRC6_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::Data,
        I::Bank8K,
        H::Last16B,
        D::DontRecommend,
        0x10000,
        "JRC 64K",
    ),
    cart(
        80,
        "Mode_JRC_RAMBOX",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::Data,
        I::Bank8K,
        H::First8K,
        D::DontRecommend,
        0x10000,
        "JRC RAMBOX",
    ),
    cart(
        86,
        "Mode_XEMulticart_8K",
        S::Atari800,
        SizeClasses::SIZE_8K,
        W::None,
        B::AddressD5Dx,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x2000,
        "XE Multicart (8K)",
    ),
    cart(
        87,
        "Mode_XEMulticart_16K",
        S::Atari800,
        SizeClasses::SIZE_16K,
        W::None,
        B::AddressD5Dx,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x4000,
        "XE Multicart (16K)",
    ),
    cart(
        88,
        "Mode_XEMulticart_32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::AddressD5Dx,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x8000,
        "XE Multicart (32K)",
    ),
    cart(
        89,
        "Mode_XEMulticart_64K",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::AddressD5Dx,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x10000,
        "XE Multicart (64K)",
    ),
    cart(
        90,
        "Mode_XEMulticart_128K",
        S::Atari800,
        SizeClasses::SIZE_128K,
        W::None,
        B::AddressD5Dx,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x20000,
        "XE Multicart (128K)",
    ),
    cart(
        91,
        "Mode_XEMulticart_256K",
        S::Atari800,
        SizeClasses::SIZE_256K,
        W::None,
        B::AddressD5Dx,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x40000,
        "XE Multicart (256K)",
    ),
    cart(
        92,
        "Mode_XEMulticart_512K",
        S::Atari800,
        SizeClasses::SIZE_512K,
        W::None,
        B::AddressD5Dx,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x80000,
        "XE Multicart (512K)",
    ),
    cart(
        93,
        "Mode_XEMulticart_1M",
        S::Atari800,
        SizeClasses::SIZE_1M,
        W::None,
        B::AddressD5Dx,
        I::Bank16K,
        H::Last16B,
        D::None,
        0x100000,
        "XE Multicart (1MB)",
    ),
    cart(
        83,
        "Mode_SICPlus",
        S::Atari800,
        SizeClasses::SIZE_1M,
        W::None,
        B::Data,
        I::Bank8K,
        H::First16KPreferAll16K,
        D::None,
        0x100000,
        "SIC+",
    ),
    cart(
        81,
        "Mode_MDDOS",
        S::Atari800,
        SizeClasses::SIZE_64K,
        W::None,
        B::Address,
        I::Bank8K,
        H::First16KPreferAll16K,
        D::DontRecommend,
        0x10000,
        "MDDOS",
    ),
    cart(
        82,
        "Mode_COS32K",
        S::Atari800,
        SizeClasses::SIZE_32K,
        W::None,
        B::None,
        I::Bank16K,
        H::First16K,
        D::DontRecommend,
        0x8000,
        "COS 32K",
    ),
    cart(
        79,
        "Mode_Pronto",
        S::Atari800,
        SizeClasses::SIZE_16K,
        W::None,
        B::None,
        I::Bank16K,
        H::First16K,
        D::DontRecommend,
        0x4000,
        "Pronto",
    ),
    cart(
        4,
        "Mode_5200_32K",
        S::Atari5200,
        SizeClasses::SIZE_32K,
        W::None,
        B::None,
        I::Bank32K,
        H::Last16B,
        D::None,
        0x8000,
        "5200 32K",
    ),
    cart(
        6,
        "Mode_5200_16K_TwoChip",
        S::Atari5200,
        SizeClasses::SIZE_16K,
        W::None,
        B::None,
        I::Bank32K,
        H::Last16B,
        D::None,
        0x4000,
        "5200 16K (two chip)",
    ),
    cart(
        16,
        "Mode_5200_16K_OneChip",
        S::Atari5200,
        SizeClasses::SIZE_16K,
        W::None,
        B::None,
        I::Bank32K,
        H::Last16B,
        D::None,
        0x4000,
        "5200 16K (one chip)",
    ),
    cart(
        19,
        "Mode_5200_8K",
        S::Atari5200,
        SizeClasses::SIZE_8K,
        W::None,
        B::None,
        I::Bank32K,
        H::Last16B,
        D::None,
        0x2000,
        "5200 8K",
    ),
    cart(
        20,
        "Mode_5200_4K",
        S::Atari5200,
        SizeClasses::SIZE_4K,
        W::None,
        B::None,
        I::Bank32K,
        H::Last16B,
        D::None,
        0x1000,
        "5200 4K",
    ),
    cart(
        71,
        "Mode_5200_64K_32KBanks",
        S::Atari5200,
        SizeClasses::SIZE_64K,
        W::None,
        B::Bfxx,
        I::Bank32K,
        H::Last32K,
        D::None,
        0x10000,
        "5200 64K Super Cart (32K banks)",
    ),
    cart(
        72,
        "Mode_5200_128K_32KBanks",
        S::Atari5200,
        SizeClasses::SIZE_128K,
        W::None,
        B::Bfxx,
        I::Bank32K,
        H::Last32K,
        D::None,
        0x20000,
        "5200 128K Super Cart (32K banks)",
    ),
    cart(
        73,
        "Mode_5200_256K_32KBanks",
        S::Atari5200,
        SizeClasses::SIZE_256K,
        W::None,
        B::Bfxx,
        I::Bank32K,
        H::Last32K,
        D::None,
        0x40000,
        "5200 256K Super Cart (32K banks)",
    ),
    cart(
        74,
        "Mode_5200_512K_32KBanks",
        S::Atari5200,
        SizeClasses::SIZE_512K,
        W::None,
        B::Bfxx,
        I::Bank32K,
        H::Last32K,
        D::None,
        0x80000,
        "5200 512K Super Cart (32K banks)",
    ),
    cart(
        -1,
        "Mode_Unknown",
        S::Atari800,
        SizeClasses::SIZE_2K,
        W::None,
        B::None,
        I::Bank2K,
        H::Last16B,
        D::None,
        0x0000,
        "Unknown cartridge",
    ),
];
