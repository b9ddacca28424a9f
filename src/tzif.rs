//! TZif (version 2) encoding and decoding of transition tables, the binary format of
//! the system zoneinfo files (<http://man7.org/linux/man-pages/man5/tzfile.5.html>).
//!
//!```rust
//! use libtzdef::{definitions::ASIA_KHANDYGA, tzif};
//! let buf = tzif::encode(&ASIA_KHANDYGA).unwrap();
//! assert_eq!(tzif::decode(&buf, "Asia/Khandyga").unwrap(), ASIA_KHANDYGA);
//!```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::from_utf8;

use byteorder::{ByteOrder, BE};

use crate::{TimezoneOffset, Transition, TransitionInstant, TransitionTable, TzError};

// TZif magic four bytes
const MAGIC: u32 = 0x545A6966;
// Header length
const HEADER_LEN: usize = 0x2C;
// Assumed DST delta when it can't be derived from neighbouring offsets
const DEFAULT_DST: i32 = 3600;

#[derive(Debug, PartialEq)]
pub(crate) struct Header {
    pub(crate) tzh_ttisutcnt: usize,
    pub(crate) tzh_ttisstdcnt: usize,
    pub(crate) tzh_leapcnt: usize,
    pub(crate) tzh_timecnt: usize,
    pub(crate) tzh_typecnt: usize,
    pub(crate) tzh_charcnt: usize,
    pub(crate) v2_header_start: usize,
}

#[derive(Debug, PartialEq)]
struct Ttinfo {
    tt_utoff: i32,
    tt_isdst: bool,
    tt_abbrind: u8,
}

fn slice(buffer: &[u8], start: usize, len: usize) -> Result<&[u8], TzError> {
    start
        .checked_add(len)
        .and_then(|end| buffer.get(start..end))
        .ok_or(TzError::ParseError)
}

fn read_count(buffer: &[u8], at: usize) -> Result<usize, TzError> {
    Ok(BE::read_u32(slice(buffer, at, 4)?) as usize)
}

pub(crate) fn parse_header(buffer: &[u8]) -> Result<Header, TzError> {
    let magic = BE::read_u32(slice(buffer, 0x00, 4).map_err(|_| TzError::InvalidMagic)?);
    if magic != MAGIC {
        return Err(TzError::InvalidMagic);
    }
    // Version byte: '2', '3' or '4'
    if !matches!(buffer.get(4), Some(b'2'..=b'4')) {
        return Err(TzError::UnsupportedFormat);
    }
    let tzh_ttisutcnt = read_count(buffer, 0x14)?;
    let tzh_ttisstdcnt = read_count(buffer, 0x18)?;
    let tzh_leapcnt = read_count(buffer, 0x1C)?;
    let tzh_timecnt = read_count(buffer, 0x20)?;
    let tzh_typecnt = read_count(buffer, 0x24)?;
    let tzh_charcnt = read_count(buffer, 0x28)?;
    // V2 format data start
    let s: usize = tzh_timecnt * 5
        + tzh_typecnt * 6
        + tzh_leapcnt * 8
        + tzh_charcnt
        + tzh_ttisstdcnt
        + tzh_ttisutcnt
        + HEADER_LEN;
    if BE::read_u32(slice(buffer, s, 4)?) != MAGIC {
        return Err(TzError::InvalidMagic);
    }
    Ok(Header {
        tzh_ttisutcnt: read_count(buffer, s + 0x14)?,
        tzh_ttisstdcnt: read_count(buffer, s + 0x18)?,
        tzh_leapcnt: read_count(buffer, s + 0x1C)?,
        tzh_timecnt: read_count(buffer, s + 0x20)?,
        tzh_typecnt: read_count(buffer, s + 0x24)?,
        tzh_charcnt: read_count(buffer, s + 0x28)?,
        v2_header_start: s,
    })
}

/// Reads a TZif buffer into a table named `identifier`.
///
/// TZif only records the total offset and a DST flag. The DST delta of a DST
/// type is the difference with the next standard time type in use (or the
/// previous one, down to the initial type, when the zone never returned to standard time).
pub fn decode(
    buffer: &[u8],
    identifier: impl Into<alloc::borrow::Cow<'static, str>>,
) -> Result<TransitionTable, TzError> {
    let identifier = identifier.into();
    let header = parse_header(buffer)?;
    log::debug!("decoding TZif data for {}: {:?}", identifier, header);

    // Calculates fields indexes (Version 2 format)
    let data_start = header.v2_header_start + HEADER_LEN;
    let tzh_timecnt_end = data_start + header.tzh_timecnt * 8;
    let tzh_indices_end = tzh_timecnt_end + header.tzh_timecnt;
    let tzh_typecnt_end = tzh_indices_end + header.tzh_typecnt * 6;

    // Extracting data fields
    let times: Vec<i64> = slice(buffer, data_start, header.tzh_timecnt * 8)?
        .chunks_exact(8)
        .map(BE::read_i64)
        .collect();
    let indices = slice(buffer, tzh_timecnt_end, header.tzh_timecnt)?;
    let ttinfos: Vec<Ttinfo> = slice(buffer, tzh_indices_end, header.tzh_typecnt * 6)?
        .chunks_exact(6)
        .map(|tti| Ttinfo {
            tt_utoff: BE::read_i32(&tti[0..4]),
            tt_isdst: tti[4] == 1,
            tt_abbrind: tti[5],
        })
        .collect();
    let chars = slice(buffer, tzh_typecnt_end, header.tzh_charcnt)?;

    let mut offsets = Vec::with_capacity(ttinfos.len());
    for (k, tti) in ttinfos.iter().enumerate() {
        let abbr = chars
            .get(tti.tt_abbrind as usize..)
            .and_then(|rest| rest.split(|c| *c == 0).next())
            .ok_or(TzError::ParseError)?;
        let abbreviation: String = from_utf8(abbr)?.to_string();
        let (utc_offset, std_offset) = if tti.tt_isdst {
            let delta = dst_delta(k, indices, &ttinfos).unwrap_or_else(|| {
                log::warn!(
                    "{}: no standard offset next to DST type {}, assuming {}s",
                    identifier,
                    k,
                    DEFAULT_DST
                );
                DEFAULT_DST
            });
            (tti.tt_utoff - delta, delta)
        } else {
            (tti.tt_utoff, 0)
        };
        offsets.push(TimezoneOffset {
            utc_offset,
            std_offset,
            abbreviation: abbreviation.into(),
        });
    }

    let transitions = times
        .iter()
        .zip(indices)
        .map(|(t, i)| Transition::new(TransitionInstant::from_timestamp(*t), *i as usize))
        .collect();

    TransitionTable::new(identifier, offsets, transitions)
}

fn dst_delta(k: usize, indices: &[u8], ttinfos: &[Ttinfo]) -> Option<i32> {
    let first_use = indices.iter().position(|i| *i as usize == k)?;
    let standard = |i: &u8| ttinfos.get(*i as usize).filter(|tti| !tti.tt_isdst);
    let reference = indices[first_use..]
        .iter()
        .find_map(standard)
        .or_else(|| indices[..first_use].iter().rev().chain(&[0]).find_map(standard))?;
    Some(ttinfos[k].tt_utoff - reference.tt_utoff).filter(|delta| *delta != 0)
}

fn put_u32(out: &mut Vec<u8>, v: u32) {
    let mut b = [0; 4];
    BE::write_u32(&mut b, v);
    out.extend_from_slice(&b);
}

fn put_i32(out: &mut Vec<u8>, v: i32) {
    let mut b = [0; 4];
    BE::write_i32(&mut b, v);
    out.extend_from_slice(&b);
}

fn put_i64(out: &mut Vec<u8>, v: i64) {
    let mut b = [0; 8];
    BE::write_i64(&mut b, v);
    out.extend_from_slice(&b);
}

/// Writes a TZif version 2 buffer: one local time type per offset, in table order.
/// Fails with `FractionalInstant` if a transition does not fall on a whole second.
pub fn encode(table: &TransitionTable) -> Result<Vec<u8>, TzError> {
    // Type indices are a single byte
    if table.offsets().len() > u8::MAX as usize + 1 {
        return Err(TzError::ParseError);
    }
    let mut times = Vec::with_capacity(table.transitions().len());
    for tr in table.transitions() {
        if !tr.at.is_integral() {
            return Err(TzError::FractionalInstant);
        }
        times.push((tr.at.numerator(), tr.offset as u8));
    }

    // Abbreviations, NUL terminated, shared between types
    let mut chars: Vec<u8> = Vec::new();
    let mut abbrinds = Vec::with_capacity(table.offsets().len());
    for o in table.offsets() {
        let abbr = o.abbreviation.as_bytes();
        let mut found = None;
        let mut start = 0;
        for part in chars.split(|c| *c == 0) {
            if part == abbr {
                found = Some(start);
                break;
            }
            start += part.len() + 1;
        }
        let index = match found {
            Some(i) if i < chars.len() => i,
            _ => {
                let i = chars.len();
                chars.extend_from_slice(abbr);
                chars.push(0);
                i
            }
        };
        abbrinds.push(u8::try_from(index).map_err(|_| TzError::ParseError)?);
    }

    let v1_times: Vec<(i32, u8)> = times
        .iter()
        .filter_map(|(t, i)| i32::try_from(*t).ok().map(|t| (t, *i)))
        .collect();

    let mut out = Vec::new();
    // Version 1 block, 32-bit times
    write_header(&mut out, v1_times.len(), table.offsets().len(), chars.len());
    for (t, _) in &v1_times {
        put_i32(&mut out, *t);
    }
    out.extend(v1_times.iter().map(|(_, i)| *i));
    write_types(&mut out, table.offsets(), &abbrinds);
    out.extend_from_slice(&chars);

    // Version 2 block, 64-bit times
    write_header(&mut out, times.len(), table.offsets().len(), chars.len());
    for (t, _) in &times {
        put_i64(&mut out, *t);
    }
    out.extend(times.iter().map(|(_, i)| *i));
    write_types(&mut out, table.offsets(), &abbrinds);
    out.extend_from_slice(&chars);

    // No POSIX rule beyond the last transition
    out.extend_from_slice(b"\n\n");
    Ok(out)
}

fn write_header(out: &mut Vec<u8>, timecnt: usize, typecnt: usize, charcnt: usize) {
    put_u32(out, MAGIC);
    out.push(b'2');
    out.extend_from_slice(&[0; 15]);
    // isutcnt, isstdcnt, leapcnt
    for _ in 0..3 {
        put_u32(out, 0);
    }
    put_u32(out, timecnt as u32);
    put_u32(out, typecnt as u32);
    put_u32(out, charcnt as u32);
}

fn write_types(out: &mut Vec<u8>, offsets: &[TimezoneOffset], abbrinds: &[u8]) {
    for (o, abbrind) in offsets.iter().zip(abbrinds) {
        put_i32(out, o.utc_total_offset());
        out.push(o.is_dst() as u8);
        out.push(*abbrind);
    }
}

#[cfg(feature = "std")]
impl TransitionTable {
    /// Reads a system TZif file. The zone name is made of the last two path
    /// components (ie. "Asia/Khandyga"), or the last one under the zoneinfo root.
    ///
    ///```rust,no_run
    /// use libtzdef::TransitionTable;
    /// let tz = TransitionTable::read_tzif("/usr/share/zoneinfo/Asia/Khandyga").unwrap();
    /// println!("{:?}", tz.offset_at(1315832400));
    ///```
    pub fn read_tzif(path: &str) -> Result<TransitionTable, TzError> {
        let buffer = std::fs::read(path)?;
        decode(&buffer, zone_name(path)?)
    }
}

/// Generating zone name (ie. Asia/Khandyga) from requested file name
#[cfg(feature = "std")]
pub(crate) fn zone_name(path: &str) -> Result<String, TzError> {
    let parts: Vec<&str> = std::path::Path::new(path)
        .iter()
        .filter_map(|c| c.to_str())
        .collect();
    match parts.as_slice() {
        [.., "zoneinfo", zone] => Ok(zone.to_string()),
        [_, .., region, zone] => Ok(format!("{}/{}", region, zone)),
        _ => Err(TzError::InvalidTimezone),
    }
}
