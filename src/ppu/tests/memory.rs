//! Memory folding: nametable mirroring, palette aliasing, pattern access

use super::*;

#[test]
fn test_nametable_mirror_is_stable_across_the_3000_mirror() {
    // For every mode and every offset, $2xxx and $3xxx fold identically
    let modes = [
        Mirroring::Horizontal,
        Mirroring::Vertical,
        Mirroring::SingleScreenLow,
        Mirroring::SingleScreenHigh,
    ];

    let mut ppu = new_ppu();
    for mode in modes {
        ppu.set_mirroring(mode);
        for offset in 0..0x1000u16 {
            assert_eq!(
                ppu.mirror_nametable_addr(0x2000 + offset),
                ppu.mirror_nametable_addr(0x3000 + offset),
                "mode {mode:?}, offset {offset:#X}"
            );
        }
    }
}

#[test]
fn test_horizontal_mirroring_folds_left_right() {
    let mut ppu = new_ppu();
    ppu.set_mirroring(Mirroring::Horizontal);

    // $2000=$2400, $2800=$2C00, and the pairs are distinct
    assert_eq!(
        ppu.mirror_nametable_addr(0x2000),
        ppu.mirror_nametable_addr(0x2400)
    );
    assert_eq!(
        ppu.mirror_nametable_addr(0x2800),
        ppu.mirror_nametable_addr(0x2C00)
    );
    assert_ne!(
        ppu.mirror_nametable_addr(0x2000),
        ppu.mirror_nametable_addr(0x2800)
    );
}

#[test]
fn test_vertical_mirroring_folds_top_bottom() {
    let mut ppu = new_ppu();
    ppu.set_mirroring(Mirroring::Vertical);

    assert_eq!(
        ppu.mirror_nametable_addr(0x2000),
        ppu.mirror_nametable_addr(0x2800)
    );
    assert_eq!(
        ppu.mirror_nametable_addr(0x2400),
        ppu.mirror_nametable_addr(0x2C00)
    );
    assert_ne!(
        ppu.mirror_nametable_addr(0x2000),
        ppu.mirror_nametable_addr(0x2400)
    );
}

#[test]
fn test_single_screen_modes() {
    let mut ppu = new_ppu();

    ppu.set_mirroring(Mirroring::SingleScreenLow);
    for base in [0x2000u16, 0x2400, 0x2800, 0x2C00] {
        assert_eq!(ppu.mirror_nametable_addr(base + 0x123), 0x123);
    }

    ppu.set_mirroring(Mirroring::SingleScreenHigh);
    for base in [0x2000u16, 0x2400, 0x2800, 0x2C00] {
        assert_eq!(ppu.mirror_nametable_addr(base + 0x123), 0x400 + 0x123);
    }
}

#[test]
fn test_horizontal_write_read_through_registers() {
    let mut ppu = new_ppu();
    ppu.set_mirroring(Mirroring::Horizontal);

    // Seed $2000 with a known byte, then write $55 through $2400
    set_vram_addr(&mut ppu, 0x2000);
    ppu.write_register(PPUDATA, 0x99);
    set_vram_addr(&mut ppu, 0x2400);
    ppu.write_register(PPUDATA, 0x55);

    // $2000 aliases $2400, so the $55 replaced the $99
    set_vram_addr(&mut ppu, 0x2000);
    ppu.read_register(PPUDATA);
    assert_eq!(ppu.read_register(PPUDATA), 0x55);

    // $2C00 mirrors $2800, which is independent of $2000/$2400
    set_vram_addr(&mut ppu, 0x2800);
    ppu.write_register(PPUDATA, 0x77);
    set_vram_addr(&mut ppu, 0x2C00);
    ppu.read_register(PPUDATA);
    assert_eq!(ppu.read_register(PPUDATA), 0x77);
}

#[test]
fn test_palette_aliases() {
    let mut ppu = new_ppu();

    for (alias, target) in [(0x3F10u16, 0x3F00u16), (0x3F14, 0x3F04), (0x3F18, 0x3F08), (0x3F1C, 0x3F0C)] {
        ppu.write_ppu_memory(alias, 0x2A);
        assert_eq!(ppu.read_ppu_memory(target), 0x2A, "{alias:#X} -> {target:#X}");

        ppu.write_ppu_memory(target, 0x15);
        assert_eq!(ppu.read_ppu_memory(alias), 0x15, "{target:#X} -> {alias:#X}");
    }
}

#[test]
fn test_palette_non_alias_entries_are_independent() {
    let mut ppu = new_ppu();

    ppu.write_ppu_memory(0x3F01, 0x11);
    ppu.write_ppu_memory(0x3F11, 0x22);
    assert_eq!(ppu.read_ppu_memory(0x3F01), 0x11);
    assert_eq!(ppu.read_ppu_memory(0x3F11), 0x22);
}

#[test]
fn test_palette_mirrors_every_32_bytes() {
    let mut ppu = new_ppu();

    ppu.write_ppu_memory(0x3F05, 0x2C);
    assert_eq!(ppu.read_ppu_memory(0x3F25), 0x2C);
    assert_eq!(ppu.read_ppu_memory(0x3FE5), 0x2C);
}

#[test]
fn test_pattern_table_access_through_mapper() {
    let (mut ppu, _mapper) = ppu_with_chr_ram();

    ppu.write_ppu_memory(0x0123, 0x42);
    assert_eq!(ppu.read_ppu_memory(0x0123), 0x42);
}

#[test]
fn test_pattern_reads_without_mapper_return_zero() {
    let ppu = new_ppu();
    assert_eq!(ppu.read_ppu_memory(0x0000), 0);
    assert_eq!(ppu.read_ppu_memory(0x1FFF), 0);
}

#[test]
fn test_mapper_mirroring_is_live() {
    use crate::cartridge::Mapper;

    // MMC3 can flip mirroring at runtime; the PPU must see it immediately
    let descriptor = CartridgeDescriptor::new(
        4,
        vec![0; 32 * 1024],
        vec![0; 8 * 1024],
        Mirroring::Vertical,
    );
    let mapper: MapperHandle =
        std::rc::Rc::new(std::cell::RefCell::new(create_mapper(descriptor).unwrap()));
    let mut ppu = Ppu::new();
    ppu.set_mapper(std::rc::Rc::clone(&mapper));

    assert_eq!(
        ppu.mirror_nametable_addr(0x2000),
        ppu.mirror_nametable_addr(0x2800),
        "vertical at power-on"
    );

    mapper.borrow_mut().cpu_write(0xA000, 1); // horizontal
    assert_eq!(
        ppu.mirror_nametable_addr(0x2000),
        ppu.mirror_nametable_addr(0x2400),
        "horizontal after the register write"
    );
}
