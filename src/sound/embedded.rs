//! Embedded sound data.
//!
//! This module provides a fallback notification sound that is compiled
//! into the binary. It is used when the configured sound file cannot be
//! opened or decoded.

/// Embedded fallback sound (generated 880 Hz beep).
///
/// WAV format structure:
/// - RIFF header (12 bytes)
/// - fmt chunk (24 bytes): 16-bit PCM, 8 kHz, mono
/// - data chunk header (8 bytes)
/// - audio data (1920 bytes)
pub const DEFAULT_SOUND_DATA: &[u8] = &[
    0x52, 0x49, 0x46, 0x46, 0xA4, 0x07, 0x00, 0x00, 0x57, 0x41, 0x56, 0x45,
    0x66, 0x6D, 0x74, 0x20, 0x10, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
    0x40, 0x1F, 0x00, 0x00, 0x80, 0x3E, 0x00, 0x00, 0x02, 0x00, 0x10, 0x00,
    0x64, 0x61, 0x74, 0x61, 0x80, 0x07, 0x00, 0x00, 0x00, 0x00, 0xE6, 0x30,
    0x47, 0x4B, 0x16, 0x43, 0x27, 0x1C, 0x65, 0xE8, 0x91, 0xBF, 0x5E, 0xB4,
    0xDE, 0xCB, 0x3A, 0xFB, 0xAB, 0x2C, 0x88, 0x49, 0x9E, 0x44, 0x41, 0x20,
    0x2F, 0xED, 0xD8, 0xC2, 0xA2, 0xB4, 0x03, 0xC9, 0x8F, 0xF6, 0x55, 0x28,
    0x84, 0x47, 0xD7, 0x45, 0x26, 0x24, 0xF5, 0xF1, 0x4F, 0xC6, 0x34, 0xB5,
    0x6E, 0xC6, 0x04, 0xF2, 0xEB, 0x23, 0x3F, 0x45, 0xC1, 0x46, 0xD2, 0x27,
    0xB3, 0xF6, 0xF1, 0xC9, 0x12, 0xB6, 0x23, 0xC4, 0x9F, 0xED, 0x70, 0x1F,
    0xBC, 0x42, 0x5C, 0x47, 0x42, 0x2B, 0x63, 0xFB, 0xBB, 0xCD, 0x39, 0xB7,
    0x22, 0xC2, 0x62, 0xE9, 0xEA, 0x1A, 0x00, 0x40, 0xAA, 0x47, 0x74, 0x2E,
    0x00, 0x00, 0xA6, 0xD1, 0xA7, 0xB8, 0x6B, 0xC0, 0x52, 0xE5, 0x5F, 0x16,
    0x0F, 0x3D, 0xAB, 0x47, 0x65, 0x31, 0x86, 0x04, 0xAF, 0xD5, 0x58, 0xBA,
    0x00, 0xBF, 0x73, 0xE1, 0xD3, 0x11, 0xEC, 0x39, 0x60, 0x47, 0x13, 0x34,
    0xF1, 0x08, 0xCF, 0xD9, 0x4A, 0xBC, 0xE1, 0xBD, 0xC7, 0xDD, 0x4B, 0x0D,
    0x9C, 0x36, 0xCC, 0x46, 0x7D, 0x36, 0x3C, 0x0D, 0x03, 0xDE, 0x79, 0xBE,
    0x0D, 0xBD, 0x53, 0xDA, 0xCD, 0x08, 0x24, 0x33, 0xF0, 0x45, 0xA1, 0x38,
    0x63, 0x11, 0x44, 0xE2, 0xE2, 0xC0, 0x83, 0xBC, 0x18, 0xD7, 0x5D, 0x04,
    0x88, 0x2F, 0xCF, 0x44, 0x7E, 0x3A, 0x62, 0x15, 0x8F, 0xE6, 0x81, 0xC3,
    0x44, 0xBC, 0x19, 0xD4, 0x00, 0x00, 0xCD, 0x2B, 0x6C, 0x43, 0x13, 0x3C,
    0x35, 0x19, 0xDE, 0xEA, 0x52, 0xC6, 0x4D, 0xBC, 0x58, 0xD1, 0xBA, 0xFB,
    0xF7, 0x27, 0xC8, 0x41, 0x61, 0x3D, 0xD9, 0x1C, 0x2C, 0xEF, 0x50, 0xC9,
    0x9E, 0xBC, 0xD8, 0xCE, 0x8F, 0xF7, 0x0C, 0x24, 0xE8, 0x3F, 0x67, 0x3E,
    0x4B, 0x20, 0x75, 0xF3, 0x79, 0xCC, 0x34, 0xBD, 0x98, 0xCC, 0x84, 0xF3,
    0x10, 0x20, 0xCF, 0x3D, 0x25, 0x3F, 0x88, 0x23, 0xB3, 0xF7, 0xC6, 0xCF,
    0x0E, 0xBE, 0x9C, 0xCA, 0x9C, 0xEF, 0x08, 0x1C, 0x7F, 0x3B, 0x9D, 0x3F,
    0x8E, 0x26, 0xE3, 0xFB, 0x35, 0xD3, 0x29, 0xBF, 0xE3, 0xC8, 0xDB, 0xEB,
    0xF8, 0x17, 0xFE, 0x38, 0xCE, 0x3F, 0x5A, 0x29, 0x00, 0x00, 0xC0, 0xD6,
    0x82, 0xC0, 0x6E, 0xC7, 0x44, 0xE8, 0xE6, 0x13, 0x4E, 0x36, 0xBB, 0x3F,
    0xEB, 0x2B, 0x06, 0x04, 0x63, 0xDA, 0x18, 0xC2, 0x3D, 0xC6, 0xDB, 0xE4,
    0xD6, 0x0F, 0x73, 0x33, 0x64, 0x3F, 0x3E, 0x2E, 0xF0, 0x07, 0x19, 0xDE,
    0xE6, 0xC3, 0x51, 0xC5, 0xA2, 0xE1, 0xCC, 0x0B, 0x72, 0x30, 0xCC, 0x3E,
    0x53, 0x30, 0xBC, 0x0B, 0xDD, 0xE1, 0xE9, 0xC5, 0xA8, 0xC4, 0x9C, 0xDE,
    0xCC, 0x07, 0x4F, 0x2D, 0xF4, 0x3D, 0x28, 0x32, 0x65, 0x0F, 0xAC, 0xE5,
    0x1F, 0xC8, 0x43, 0xC4, 0xCC, 0xDB, 0xDC, 0x03, 0x0E, 0x2A, 0xDF, 0x3C,
    0xBD, 0x33, 0xE9, 0x12, 0x81, 0xE9, 0x84, 0xCA, 0x20, 0xC4, 0x32, 0xD9,
    0x00, 0x00, 0xB4, 0x26, 0x90, 0x3B, 0x11, 0x35, 0x43, 0x16, 0x57, 0xED,
    0x13, 0xCD, 0x3D, 0xC4, 0xD2, 0xD6, 0x3B, 0xFC, 0x44, 0x23, 0x09, 0x3A,
    0x24, 0x36, 0x71, 0x19, 0x29, 0xF1, 0xC9, 0xCF, 0x9A, 0xC4, 0xAC, 0xD4,
    0x90, 0xF8, 0xC3, 0x1F, 0x4D, 0x38, 0xF7, 0x36, 0x71, 0x1C, 0xF4, 0xF4,
    0xA3, 0xD2, 0x34, 0xC5, 0xC2, 0xD2, 0x04, 0xF5, 0x35, 0x1C, 0x5F, 0x36,
    0x8A, 0x37, 0x3F, 0x1F, 0xB4, 0xF8, 0x9B, 0xD5, 0x0A, 0xC6, 0x15, 0xD1,
    0x99, 0xF1, 0xA0, 0x18, 0x42, 0x34, 0xDD, 0x37, 0xDA, 0x21, 0x64, 0xFC,
    0xAF, 0xD8, 0x19, 0xC7, 0xA4, 0xCF, 0x54, 0xEE, 0x06, 0x15, 0xFB, 0x31,
    0xF3, 0x37, 0x41, 0x24, 0x00, 0x00, 0xD9, 0xDB, 0x5E, 0xC8, 0x71, 0xCE,
    0x36, 0xEB, 0x6D, 0x11, 0x8D, 0x2F, 0xCB, 0x37, 0x71, 0x26, 0x85, 0x03,
    0x16, 0xDF, 0xD7, 0xC9, 0x7A, 0xCD, 0x43, 0xE8, 0xD8, 0x0D, 0xFA, 0x2C,
    0x68, 0x37, 0x69, 0x28, 0xF0, 0x06, 0x62, 0xE2, 0x81, 0xCB, 0xC1, 0xCC,
    0x7D, 0xE5, 0x4C, 0x0A, 0x48, 0x2A, 0xCC, 0x36, 0x29, 0x2A, 0x3C, 0x0A,
    0xB8, 0xE5, 0x59, 0xCD, 0x44, 0xCC, 0xE6, 0xE2, 0xCC, 0x06, 0x7A, 0x27,
    0xF8, 0x35, 0xAF, 0x2B, 0x68, 0x0D, 0x14, 0xE9, 0x5C, 0xCF, 0x03, 0xCC,
    0x7F, 0xE0, 0x5C, 0x03, 0x94, 0x24, 0xF0, 0x34, 0xFC, 0x2C, 0x70, 0x10,
    0x73, 0xEC, 0x86, 0xD1, 0xFB, 0xCB, 0x4C, 0xDE, 0x00, 0x00, 0x9A, 0x21,
    0xB4, 0x33, 0x0E, 0x2E, 0x51, 0x13, 0xCF, 0xEF, 0xD4, 0xD3, 0x2D, 0xCC,
    0x4C, 0xDC, 0xBB, 0xFC, 0x90, 0x1E, 0x49, 0x32, 0xE7, 0x2E, 0x09, 0x16,
    0x26, 0xF3, 0x42, 0xD6, 0x96, 0xCC, 0x81, 0xDA, 0x91, 0xF9, 0x79, 0x1B,
    0xB1, 0x30, 0x87, 0x2F, 0x96, 0x18, 0x74, 0xF6, 0xCD, 0xD8, 0x34, 0xCD,
    0xEC, 0xD8, 0x83, 0xF6, 0x5B, 0x18, 0xEF, 0x2E, 0xEE, 0x2F, 0xF6, 0x1A,
    0xB5, 0xF9, 0x70, 0xDB, 0x06, 0xCE, 0x8D, 0xD7, 0x96, 0xF3, 0x38, 0x15,
    0x05, 0x2D, 0x1E, 0x30, 0x27, 0x1D, 0xE5, 0xFC, 0x29, 0xDE, 0x08, 0xCF,
    0x65, 0xD6, 0xCC, 0xF0, 0x14, 0x12, 0xF9, 0x2A, 0x17, 0x30, 0x28, 0x1F,
    0x00, 0x00, 0xF3, 0xE0, 0x3A, 0xD0, 0x73, 0xD5, 0x28, 0xEE, 0xF4, 0x0E,
    0xCB, 0x28, 0xDB, 0x2F, 0xF7, 0x20, 0x04, 0x03, 0xCA, 0xE3, 0x97, 0xD1,
    0xB7, 0xD4, 0xAB, 0xEB, 0xDB, 0x0B, 0x82, 0x26, 0x6C, 0x2F, 0x94, 0x22,
    0xEF, 0x05, 0xAB, 0xE6, 0x1D, 0xD3, 0x31, 0xD4, 0x57, 0xE9, 0xCC, 0x08,
    0x1E, 0x24, 0xCC, 0x2E, 0xFF, 0x23, 0xBD, 0x08, 0x92, 0xE9, 0xCA, 0xD4,
    0xE0, 0xD3, 0x2F, 0xE7, 0xCB, 0x05, 0xA5, 0x21, 0xFC, 0x2D, 0x36, 0x25,
    0x6B, 0x0B, 0x7C, 0xEC, 0x99, 0xD6, 0xC2, 0xD3, 0x33, 0xE5, 0xDB, 0x02,
    0x1A, 0x1F, 0x00, 0x2D, 0x3A, 0x26, 0xF7, 0x0D, 0x65, 0xEF, 0x89, 0xD8,
    0xD7, 0xD3, 0x65, 0xE3, 0x00, 0x00, 0x81, 0x1C, 0xD9, 0x2B, 0x0C, 0x27,
    0x5F, 0x10, 0x48, 0xF2, 0x95, 0xDA, 0x1D, 0xD4, 0xC6, 0xE1, 0x3C, 0xFD,
    0xDC, 0x19, 0x89, 0x2A, 0xAA, 0x27, 0xA1, 0x12, 0x24, 0xF5, 0xBB, 0xDC,
    0x92, 0xD4, 0x56, 0xE0, 0x91, 0xFA, 0x30, 0x17, 0x15, 0x29, 0x17, 0x28,
    0xBB, 0x14, 0xF4, 0xF7, 0xF7, 0xDE, 0x34, 0xD5, 0x16, 0xDF, 0x03, 0xF8,
    0x80, 0x14, 0x7E, 0x27, 0x52, 0x28, 0xAC, 0x16, 0xB5, 0xFA, 0x45, 0xE1,
    0x02, 0xD6, 0x06, 0xDE, 0x94, 0xF5, 0xD0, 0x11, 0xC8, 0x25, 0x5E, 0x28,
    0x73, 0x18, 0x65, 0xFD, 0xA3, 0xE3, 0xF8, 0xD6, 0x26, 0xDD, 0x45, 0xF3,
    0x23, 0x0F, 0xF6, 0x23, 0x3B, 0x28, 0x0E, 0x1A, 0x00, 0x00, 0x0C, 0xE6,
    0x15, 0xD8, 0x76, 0xDC, 0x1A, 0xF1, 0x7B, 0x0C, 0x0A, 0x22, 0xEB, 0x27,
    0x7D, 0x1B, 0x84, 0x02, 0x7E, 0xE8, 0x56, 0xD9, 0xF4, 0xDB, 0x13, 0xEF,
    0xDE, 0x09, 0x09, 0x20, 0x70, 0x27, 0xBF, 0x1C, 0xEE, 0x04, 0xF5, 0xEA,
    0xB9, 0xDA, 0xA1, 0xDB, 0x32, 0xED, 0x4C, 0x07, 0xF4, 0x1D, 0xCC, 0x26,
    0xD5, 0x1D, 0x3D, 0x07, 0x6D, 0xED, 0x3A, 0xDC, 0x7C, 0xDB, 0x78, 0xEB,
    0xCA, 0x04, 0xD1, 0x1B, 0x00, 0x26, 0xBD, 0x1E, 0x6E, 0x09, 0xE4, 0xEF,
    0xD6, 0xDD, 0x82, 0xDB, 0xE7, 0xE9, 0x5B, 0x02, 0xA0, 0x19, 0x10, 0x25,
    0x79, 0x1F, 0x7E, 0x0B, 0x56, 0xF2, 0x8B, 0xDF, 0xB3, 0xDB, 0x7F, 0xE8,
    0x00, 0x00, 0x67, 0x17, 0xFD, 0x23, 0x09, 0x20, 0x6D, 0x0D, 0xC1, 0xF4,
    0x56, 0xE1, 0x0C, 0xDC, 0x40, 0xE7, 0xBD, 0xFD, 0x28, 0x15, 0xCA, 0x22,
    0x6D, 0x20, 0x39, 0x0F, 0x21, 0xF7, 0x34, 0xE3, 0x8E, 0xDC, 0x2B, 0xE6,
    0x92, 0xFB, 0xE7, 0x12, 0x79, 0x21, 0xA7, 0x20, 0xE1, 0x10, 0x74, 0xF9,
    0x21, 0xE5, 0x34, 0xDD, 0x40, 0xE5, 0x83, 0xF9, 0xA6, 0x10, 0x0E, 0x20,
    0xB7, 0x20, 0x63, 0x12, 0xB6, 0xFB, 0x1A, 0xE7, 0xFE, 0xDD, 0x7F, 0xE4,
    0x91, 0xF7, 0x68, 0x0E, 0x8B, 0x1E, 0x9E, 0x20, 0xBF, 0x13, 0xE6, 0xFD,
    0x1D, 0xE9, 0xE8, 0xDE, 0xE7, 0xE3, 0xBE, 0xF5, 0x31, 0x0C, 0xF3, 0x1C,
    0x60, 0x20, 0xF5, 0x14, 0x00, 0x00, 0x25, 0xEB, 0xF1, 0xDF, 0x78, 0xE3,
    0x0C, 0xF4, 0x03, 0x0A, 0x49, 0x1B, 0xFC, 0x1F, 0x03, 0x16, 0x03, 0x02,
    0x32, 0xED, 0x16, 0xE1, 0x31, 0xE3, 0x7B, 0xF2, 0xE0, 0x07, 0x90, 0x19,
    0x74, 0x1F, 0xEB, 0x16, 0xEE, 0x03, 0x3E, 0xEF, 0x54, 0xE2, 0x11, 0xE3,
    0x0C, 0xF1, 0xCD, 0x05, 0xCA, 0x17, 0xCC, 0x1E, 0xAB, 0x17, 0xBD, 0x05,
    0x48, 0xF1, 0xAA, 0xE3, 0x17, 0xE3, 0xC2, 0xEF, 0xCA, 0x03, 0xFC, 0x15,
    0x05, 0x1E, 0x45, 0x18, 0x70, 0x07, 0x4C, 0xF3, 0x13, 0xE5, 0x41, 0xE3,
    0x9B, 0xEE, 0xDA, 0x01, 0x27, 0x14, 0x20, 0x1D, 0xB8, 0x18, 0x05, 0x09,
    0x48, 0xF5, 0x8E, 0xE6, 0x8E, 0xE3, 0x98, 0xED, 0x00, 0x00, 0x4E, 0x12,
    0x21, 0x1C, 0x06, 0x19, 0x7B, 0x0A, 0x3A, 0xF7, 0x17, 0xE8, 0xFC, 0xE3,
    0xBA, 0xEC, 0x3D, 0xFE, 0x75, 0x10, 0x0A, 0x1B, 0x30, 0x19, 0xD1, 0x0B,
    0x1E, 0xF9, 0xAC, 0xE9, 0x89, 0xE4, 0x00, 0xEC, 0x93, 0xFC, 0x9D, 0x0E,
    0xDE, 0x19, 0x36, 0x19, 0x06, 0x0D, 0xF3, 0xFA, 0x4B, 0xEB, 0x34, 0xE5,
    0x6A, 0xEB, 0x03, 0xFB, 0xCB, 0x0C, 0x9E, 0x18, 0x1B, 0x19, 0x1A, 0x0E,
    0xB7, 0xFC, 0xEF, 0xEC, 0xF9, 0xE5, 0xF8, 0xEA, 0x8E, 0xF9, 0x00, 0x0B,
    0x4E, 0x17, 0xDF, 0x18, 0x0B, 0x0F, 0x66, 0xFE, 0x96, 0xEE, 0xD8, 0xE6,
    0xA8, 0xEA, 0x37, 0xF8, 0x3F, 0x09, 0xF1, 0x15, 0x84, 0x18, 0xDB, 0x0F,
    0x00, 0x00, 0x3F, 0xF0, 0xCD, 0xE7, 0x7B, 0xEA, 0xFE, 0xF6, 0x8A, 0x07,
    0x88, 0x14, 0x0C, 0x18, 0x89, 0x10, 0x83, 0x01, 0xE5, 0xF1, 0xD6, 0xE8,
    0x6E, 0xEA, 0xE3, 0xF5, 0xE3, 0x05, 0x17, 0x13, 0x79, 0x17, 0x16, 0x11,
    0xED, 0x02, 0x87, 0xF3, 0xF0, 0xE9, 0x82, 0xEA, 0xE7, 0xF4, 0x4D, 0x04,
    0xA0, 0x11, 0xCC, 0x16, 0x81, 0x11, 0x3D, 0x04, 0x22, 0xF5, 0x1A, 0xEB,
    0xB3, 0xEA, 0x0B, 0xF4, 0xC9, 0x02, 0x27, 0x10, 0x09, 0x16, 0xCC, 0x11,
    0x73, 0x05, 0xB4, 0xF6, 0x50, 0xEC, 0x01, 0xEB, 0x4E, 0xF3, 0x59, 0x01,
    0xAD, 0x0E, 0x30, 0x15, 0xF7, 0x11, 0x8D, 0x06, 0x3A, 0xF8, 0x91, 0xED,
    0x6A, 0xEB, 0xB1, 0xF2, 0x00, 0x00, 0x34, 0x0D, 0x46, 0x14, 0x04, 0x12,
    0x89, 0x07, 0xB3, 0xF9, 0xD9, 0xEE, 0xEC, 0xEB, 0x34, 0xF2, 0xBE, 0xFE,
    0xC1, 0x0B, 0x4B, 0x13, 0xF3, 0x11, 0x69, 0x08, 0x1C, 0xFB, 0x25, 0xF0,
    0x85, 0xEC, 0xD5, 0xF1, 0x93, 0xFD, 0x54, 0x0A, 0x42, 0x12, 0xC6, 0x11,
    0x2C, 0x09, 0x73, 0xFC, 0x75, 0xF1, 0x34, 0xED, 0x94, 0xF1, 0x82, 0xFC,
    0xF0, 0x08, 0x2E, 0x11, 0x7F, 0x11, 0xD0, 0x09, 0xB7, 0xFD, 0xC4, 0xF2,
    0xF5, 0xED, 0x71, 0xF1, 0x8C, 0xFB, 0x98, 0x07, 0x11, 0x10, 0x1F, 0x11,
    0x58, 0x0A, 0xE7, 0xFE, 0x10, 0xF4, 0xC8, 0xEE, 0x6A, 0xF1, 0xB0, 0xFA,
    0x4D, 0x06, 0xEE, 0x0E, 0xA8, 0x10, 0xC2, 0x0A, 0x00, 0x00, 0x58, 0xF5,
    0xA8, 0xEF, 0x7E, 0xF1, 0xEF, 0xF9, 0x11, 0x05, 0xC7, 0x0D, 0x1C, 0x10,
    0x0F, 0x0B, 0x02, 0x01, 0x99, 0xF6, 0x95, 0xF0, 0xAC, 0xF1, 0x4B, 0xF9,
    0xE6, 0x03, 0x9E, 0x0C, 0x7D, 0x0F, 0x41, 0x0B, 0xEC, 0x01, 0xD1, 0xF7,
    0x8C, 0xF1, 0xF2, 0xF1, 0xC2, 0xF8, 0xCD, 0x02, 0x77, 0x0B, 0xCC, 0x0E,
    0x57, 0x0B, 0xBE, 0x02, 0xFD, 0xF8, 0x8A, 0xF2, 0x4F, 0xF2, 0x54, 0xF8,
    0xC8, 0x01, 0x52, 0x0A, 0x0D, 0x0E, 0x53, 0x0B, 0x76, 0x03, 0x1C, 0xFA,
    0x8D, 0xF3, 0xC1, 0xF2, 0x02, 0xF8, 0xD9, 0x00, 0x33, 0x09, 0x41, 0x0D,
    0x36, 0x0B, 0x14, 0x04, 0x2C, 0xFB, 0x93, 0xF4, 0x46, 0xF3, 0xCB, 0xF7,
    0x00, 0x00, 0x1B, 0x08, 0x6A, 0x0C, 0x01, 0x0B, 0x98, 0x04, 0x2C, 0xFC,
    0x9A, 0xF5, 0xDC, 0xF3, 0xAE, 0xF7, 0x3E, 0xFF, 0x0D, 0x07, 0x8B, 0x0B,
    0xB6, 0x0A, 0x01, 0x05, 0x19, 0xFD, 0x9E, 0xF6, 0x81, 0xF4, 0xAA, 0xF7,
    0x94, 0xFE, 0x0B, 0x06, 0xA6, 0x0A, 0x56, 0x0A, 0x51, 0x05, 0xF3, 0xFD,
    0x9E, 0xF7, 0x34, 0xF5, 0xBE, 0xF7, 0x02, 0xFE, 0x16, 0x05, 0xBE, 0x09,
    0xE4, 0x09, 0x87, 0x05, 0xB8, 0xFE, 0x99, 0xF8, 0xF1, 0xF5, 0xE9, 0xF7,
    0x89, 0xFD, 0x30, 0x04, 0xD4, 0x08, 0x60, 0x09, 0xA4, 0x05, 0x67, 0xFF,
    0x8A, 0xF9, 0xB7, 0xF6, 0x2B, 0xF8, 0x29, 0xFD, 0x5B, 0x03, 0xEB, 0x07,
    0xCD, 0x08, 0xA8, 0x05, 0x00, 0x00, 0x72, 0xFA, 0x84, 0xF7, 0x80, 0xF8,
    0xE1, 0xFC, 0x98, 0x02, 0x06, 0x07, 0x2C, 0x08, 0x95, 0x05, 0x81, 0x00,
    0x4D, 0xFB, 0x55, 0xF8, 0xE9, 0xF8, 0xB3, 0xFC, 0xE8, 0x01, 0x25, 0x06,
    0x81, 0x07, 0x6C, 0x05, 0xEC, 0x00, 0x1A, 0xFC, 0x28, 0xF9, 0x62, 0xF9,
    0x9C, 0xFC, 0x4D, 0x01, 0x4D, 0x05, 0xCC, 0x06, 0x2D, 0x05, 0x3E, 0x01,
    0xD7, 0xFC, 0xFA, 0xF9, 0xEA, 0xF9, 0x9E, 0xFC, 0xC8, 0x00, 0x7D, 0x04,
    0x11, 0x06, 0xDA, 0x04, 0x78, 0x01, 0x84, 0xFD, 0xCA, 0xFA, 0x80, 0xFA,
    0xB6, 0xFC, 0x58, 0x00, 0xB9, 0x03, 0x51, 0x05, 0x75, 0x04, 0x9B, 0x01,
    0x1E, 0xFE, 0x96, 0xFB, 0x21, 0xFB, 0xE4, 0xFC, 0x00, 0x00, 0x02, 0x03,
    0x8E, 0x04, 0xFE, 0x03, 0xA6, 0x01, 0xA4, 0xFE, 0x5B, 0xFC, 0xCC, 0xFB,
    0x28, 0xFD, 0xBF, 0xFF, 0x59, 0x02, 0xCB, 0x03, 0x79, 0x03, 0x99, 0x01,
    0x16, 0xFF, 0x17, 0xFD, 0x7D, 0xFC, 0x7F, 0xFD, 0x95, 0xFF, 0xC1, 0x01,
    0x0B, 0x03, 0xE6, 0x02, 0x76, 0x01, 0x73, 0xFF, 0xC8, 0xFD, 0x34, 0xFD,
    0xE8, 0xFD, 0x82, 0xFF, 0x3B, 0x01, 0x4E, 0x02, 0x48, 0x02, 0x3E, 0x01,
    0xB9, 0xFF, 0x6D, 0xFE, 0xED, 0xFD, 0x62, 0xFE, 0x86, 0xFF, 0xC8, 0x00,
    0x97, 0x01, 0xA0, 0x01, 0xF0, 0x00, 0xE8, 0xFF, 0x04, 0xFF, 0xA7, 0xFE,
    0xEC, 0xFE, 0xA2, 0xFF, 0x69, 0x00, 0xE9, 0x00, 0xF1, 0x00, 0x8F, 0x00,
    0x00, 0x00, 0x8B, 0xFF, 0x60, 0xFF, 0x83, 0xFF, 0xD3, 0xFF, 0x1F, 0x00,
    0x45, 0x00, 0x3C, 0x00, 0x1C, 0x00, 0x01, 0x00,
];

/// Returns the embedded sound data.
#[must_use]
pub const fn get_embedded_sound() -> &'static [u8] {
    DEFAULT_SOUND_DATA
}

/// Returns the format description of the embedded sound.
#[must_use]
pub const fn get_embedded_sound_format() -> &'static str {
    "WAV (16-bit PCM, 8kHz, Mono)"
}
