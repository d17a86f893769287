use super::Address;
use crate::error;
use crate::lang::{Error, LineNumber, Postfix};
use std::collections::{BTreeMap, HashMap};

type Result<T> = std::result::Result<T, Error>;

/// ## Link tables
///
/// Built one line at a time while a program loads. Control transfers at
/// run time are lookups in these tables.

#[derive(Debug, Default, Clone)]
pub struct Link {
    lines: BTreeMap<u32, Address>,
    owners: BTreeMap<Address, u32>,
    for_next: HashMap<Address, Address>,
    next_for: HashMap<Address, Address>,
    if_false: HashMap<Address, Address>,
    pending_ifs: Vec<Address>,
    open_fors: Vec<Address>,
    data: Vec<Postfix>,
    data_lines: HashMap<u32, usize>,
    line_number: LineNumber,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    /// Starts a line whose first statement will be at `addr`. Line
    /// numbers must strictly increase.
    pub fn begin_line(&mut self, number: u32, addr: Address) -> Result<()> {
        if let Some(previous) = self.line_number {
            if number <= previous {
                return Err(error!(SyntaxError, Some(number);
                    format!("LINE NUMBER MUST FOLLOW {}", previous)));
            }
        }
        self.line_number = Some(number);
        self.lines.insert(number, addr);
        self.owners.insert(addr, number);
        Ok(())
    }

    /// Ends the current line. `IF` statements on it skip to `next`.
    pub fn end_line(&mut self, next: Address) {
        for addr in self.pending_ifs.drain(..) {
            self.if_false.insert(addr, next);
        }
    }

    pub fn link_for(&mut self, addr: Address) {
        self.open_fors.push(addr);
    }

    pub fn link_next(&mut self, addr: Address) -> Result<()> {
        match self.open_fors.pop() {
            Some(for_addr) => {
                self.for_next.insert(for_addr, addr);
                self.next_for.insert(addr, for_addr);
                Ok(())
            }
            None => Err(error!(NextWithoutFor, self.line_number)),
        }
    }

    pub fn link_if(&mut self, addr: Address) {
        self.pending_ifs.push(addr);
    }

    pub fn link_data(&mut self, expr: &Postfix) {
        if let Some(number) = self.line_number {
            let offset = self.data.len();
            self.data_lines.entry(number).or_insert(offset);
        }
        self.data.push(expr.clone());
    }

    /// Every `FOR` must have been closed by a `NEXT`.
    pub fn finish(&mut self) -> Result<()> {
        match self.open_fors.first() {
            Some(addr) => Err(error!(ForWithoutNext, self.line_number_for(*addr))),
            None => Ok(()),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn address_of(&self, number: u32) -> Option<Address> {
        self.lines.get(&number).copied()
    }

    /// The line that owns the statement at `addr`.
    pub fn line_number_for(&self, addr: Address) -> LineNumber {
        self.owners.range(..=addr).next_back().map(|(_, number)| *number)
    }

    /// True when `addr` is the first statement of its line.
    pub fn starts_line(&self, addr: Address) -> bool {
        self.owners.contains_key(&addr)
    }

    pub fn next_for(&self, for_addr: Address) -> Option<Address> {
        self.for_next.get(&for_addr).copied()
    }

    pub fn for_of_next(&self, next_addr: Address) -> Option<Address> {
        self.next_for.get(&next_addr).copied()
    }

    pub fn if_false(&self, if_addr: Address) -> Option<Address> {
        self.if_false.get(&if_addr).copied()
    }

    pub fn data(&self) -> &[Postfix] {
        &self.data
    }

    pub fn data_offset(&self, number: u32) -> Option<usize> {
        self.data_lines.get(&number).copied()
    }
}
