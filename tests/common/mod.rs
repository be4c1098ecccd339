#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

/// Records every write as `(command, data)` and fails once `fail_after`
/// transactions have gone through.
#[derive(Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub reads: Vec<u8>,
    pub input: u8,
    pub fail_after: Option<usize>,
    transactions: usize,
}

impl MockI2c {
    pub fn failing_after(transactions: usize) -> Self {
        Self {
            fail_after: Some(transactions),
            ..Self::default()
        }
    }

    fn next(&mut self) -> Result<(), ErrorKind> {
        if self.fail_after.is_some_and(|n| self.transactions >= n) {
            return Err(ErrorKind::NoAcknowledge(
                embedded_hal::i2c::NoAcknowledgeSource::Address,
            ));
        }
        self.transactions += 1;
        Ok(())
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.next()?;
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.next()?;
        self.reads.push(address);
        buffer.fill(self.input);
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write: &[u8],
        read: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.write(address, write)?;
        self.read(address, read)
    }

    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(data) => self.write(address, data)?,
                Operation::Read(buffer) => self.read(address, buffer)?,
            }
        }
        Ok(())
    }
}

/// Writes after the configuration word.
pub fn digit_writes(i2c: &MockI2c) -> Vec<(u8, u8)> {
    i2c.writes[1..]
        .iter()
        .map(|(command, data)| (*command, data[0]))
        .collect()
}
