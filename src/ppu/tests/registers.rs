//! Register file behavior: the $2005/$2006 write sequencing, PPUDATA
//! buffering and increments, and OAM access.

use super::*;

#[test]
fn test_ctrl_write_sets_nametable_bits_in_t() {
    let mut ppu = new_ppu();

    ppu.write_register(PPUCTRL, 0x03);
    assert_eq!(ppu.t.raw() & 0x0C00, 0x0C00);

    ppu.write_register(PPUCTRL, 0x01);
    assert_eq!(ppu.t.raw() & 0x0C00, 0x0400);
}

#[test]
fn test_scroll_write_sequence() {
    let mut ppu = new_ppu();

    // First write: coarse X and fine X
    ppu.write_register(PPUSCROLL, 0x7D); // %01111_101
    assert_eq!(ppu.t.coarse_x(), 15);
    assert_eq!(ppu.fine_x, 5);
    assert!(ppu.write_latch);

    // Second write: coarse Y and fine Y
    ppu.write_register(PPUSCROLL, 0x5E); // %01011_110
    assert_eq!(ppu.t.coarse_y(), 11);
    assert_eq!(ppu.t.fine_y(), 6);
    assert!(!ppu.write_latch);
}

#[test]
fn test_addr_write_sequence() {
    let mut ppu = new_ppu();

    ppu.write_register(PPUADDR, 0x21);
    assert!(ppu.write_latch);
    assert_eq!(ppu.t.raw() & 0xFF00, 0x2100);

    ppu.write_register(PPUADDR, 0x08);
    assert!(!ppu.write_latch);
    assert_eq!(ppu.t.raw(), 0x2108);
    assert_eq!(ppu.v.raw(), 0x2108, "v <- t on the second write");
}

#[test]
fn test_addr_first_write_clears_bit_14() {
    let mut ppu = new_ppu();
    ppu.v.set_raw(0x7FFF);
    ppu.t.set_raw(0x7FFF);

    ppu.write_register(PPUADDR, 0x3F);
    assert_eq!(ppu.t.raw() & 0x4000, 0, "fine Y high bit forced clear");
}

#[test]
fn test_status_read_resets_write_latch() {
    let mut ppu = new_ppu();

    // A stray first write, then a status read, then a clean pair
    ppu.write_register(PPUADDR, 0x15);
    ppu.read_register(PPUSTATUS);
    assert!(!ppu.write_latch);

    set_vram_addr(&mut ppu, 0x2108);
    assert_eq!(ppu.v.raw(), 0x2108);
}

#[test]
fn test_ppudata_write_and_buffered_read() {
    let mut ppu = new_ppu();

    set_vram_addr(&mut ppu, 0x2108);
    ppu.write_register(PPUDATA, 0x42);

    set_vram_addr(&mut ppu, 0x2108);
    let stale = ppu.read_register(PPUDATA);
    let fresh = ppu.read_register(PPUDATA);
    assert_eq!(stale, 0x00, "first read returns the stale buffer");
    assert_eq!(fresh, 0x42, "second read returns the written byte");
}

#[test]
fn test_ppudata_increment_by_1() {
    let mut ppu = new_ppu();
    ppu.write_register(PPUCTRL, 0x00);

    set_vram_addr(&mut ppu, 0x2100);
    ppu.write_register(PPUDATA, 0x11);
    ppu.write_register(PPUDATA, 0x22);
    assert_eq!(ppu.v.raw(), 0x2102);

    set_vram_addr(&mut ppu, 0x2100);
    ppu.read_register(PPUDATA);
    assert_eq!(ppu.read_register(PPUDATA), 0x11);
    assert_eq!(ppu.read_register(PPUDATA), 0x22);
}

#[test]
fn test_ppudata_increment_by_32() {
    let mut ppu = new_ppu();
    ppu.write_register(PPUCTRL, 0x04);

    set_vram_addr(&mut ppu, 0x2100);
    ppu.write_register(PPUDATA, 0x11);
    assert_eq!(ppu.v.raw(), 0x2120, "column mode steps one row down");
}

#[test]
fn test_oamdata_write_increments_address() {
    let mut ppu = new_ppu();

    ppu.write_register(OAMADDR, 0x10);
    ppu.write_register(OAMDATA, 0xAA);
    ppu.write_register(OAMDATA, 0xBB);

    assert_eq!(ppu.read_oam(0x10), 0xAA);
    assert_eq!(ppu.read_oam(0x11), 0xBB);
    assert_eq!(ppu.oam_addr, 0x12);
}

#[test]
fn test_oamdata_read_does_not_increment() {
    let mut ppu = new_ppu();

    ppu.write_register(OAMADDR, 0x20);
    ppu.write_register(OAMDATA, 0x55);
    ppu.write_register(OAMADDR, 0x20);

    assert_eq!(ppu.read_register(OAMDATA), 0x55);
    assert_eq!(ppu.read_register(OAMDATA), 0x55, "address stays put on reads");
    assert_eq!(ppu.oam_addr, 0x20);
}

#[test]
fn test_write_only_registers_read_open_bus() {
    let mut ppu = new_ppu();

    ppu.write_register(PPUSCROLL, 0xAB);
    assert_eq!(ppu.read_register(PPUCTRL), 0xAB);
    assert_eq!(ppu.read_register(PPUMASK), 0xAB);
    assert_eq!(ppu.read_register(OAMADDR), 0xAB);
}

#[test]
fn test_status_low_bits_are_open_bus() {
    let mut ppu = new_ppu();

    ppu.write_register(PPUSCROLL, 0xFF);
    let status = ppu.read_register(PPUSTATUS);
    assert_eq!(status & 0x1F, 0x1F, "low 5 bits come from the latch");
}
