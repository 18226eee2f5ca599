//! Builds an in-memory VB-style dataset — records framed by RDWs, packed
//! into BDW-framed blocks — then reads it back and prints each record.

use std::io::Cursor;

use zrecfm::stream::{BlockReader, BlockWriter, RecordReader, RecordWriter, StreamError};

fn main() -> Result<(), StreamError> {
    let records: &[&[u8]] = &[
        b"000100JONES     PAYROLL   00923",
        b"000200SMITH     LEDGER    04711",
        b"000300NGUYEN    INVENTORY 00042",
    ];

    // Pack the records into one block body.
    let mut body = Vec::new();
    let mut record_writer = RecordWriter::new(&mut body);
    for record in records {
        record_writer.write_record(record)?;
    }

    // Frame the body with a nonextended BDW.
    let mut dataset = Vec::new();
    BlockWriter::new(&mut dataset).write_block(&body, false)?;
    println!("dataset is {} bytes on the wire", dataset.len());

    // Read it back: outer block first, then the records inside it.
    let mut block_reader = BlockReader::new(Cursor::new(dataset));
    while let Some(block) = block_reader.read_block()? {
        let mode = if block.extended { "extended" } else { "nonextended" };
        println!("block: {} payload bytes, {mode}", block.payload.len());

        let mut record_reader = RecordReader::new(Cursor::new(block.payload));
        while let Some(record) = record_reader.read_record()? {
            println!("  record: {:?}", String::from_utf8_lossy(&record));
        }
    }

    Ok(())
}
