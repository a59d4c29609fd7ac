// Builders for in-memory workbook fixtures used by unit tests.

use rust_xlsxwriter::{Workbook, Worksheet};

pub enum XCell {
    S(&'static str),
    N(f64),
    B(bool),
    E,
}

fn fill(worksheet: &mut Worksheet, rows: &[Vec<XCell>]) {
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                XCell::S(s) => {
                    worksheet.write_string(r, c, *s).unwrap();
                }
                XCell::N(n) => {
                    worksheet.write_number(r, c, *n).unwrap();
                }
                XCell::B(b) => {
                    worksheet.write_boolean(r, c, *b).unwrap();
                }
                XCell::E => {}
            }
        }
    }
}

pub fn xlsx_bytes(rows: &[Vec<XCell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    fill(worksheet, rows);
    workbook.save_to_buffer().unwrap()
}

pub fn xlsx_bytes_with_sheets(sheets: &[(&str, Vec<Vec<XCell>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        fill(worksheet, rows);
    }
    workbook.save_to_buffer().unwrap()
}
