use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Name of the array every program starts with.
pub const DEFAULT_ARRAY: &str = "@";
pub const DEFAULT_ARRAY_SIZE: usize = 100;
pub const MAX_RANK: usize = 3;
const MAX_ELEMENTS: usize = 1 << 24;

/// ## Array memory
///
/// Storage for each dimension covers every subscript from zero to the
/// declared size, so changing the base never reallocates. The base only
/// moves the lowest legal subscript.

#[derive(Debug, Clone)]
pub struct Arrays {
    base: i64,
    dims: HashMap<Rc<str>, Vec<usize>>,
    data: HashMap<Rc<str>, Vec<f64>>,
}

impl Default for Arrays {
    fn default() -> Arrays {
        let mut arrays = Arrays {
            base: 0,
            dims: HashMap::default(),
            data: HashMap::default(),
        };
        arrays.insert(DEFAULT_ARRAY.into(), vec![DEFAULT_ARRAY_SIZE]);
        arrays
    }
}

impl Arrays {
    pub fn new() -> Arrays {
        Arrays::default()
    }

    pub fn base(&self) -> i64 {
        self.base
    }

    pub fn set_base(&mut self, base: i64) {
        debug_assert!(base == 0 || base == 1);
        self.base = base;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dims.contains_key(name)
    }

    pub fn rank(&self, name: &str) -> Option<usize> {
        self.dims.get(name).map(Vec::len)
    }

    pub fn dimension(&mut self, name: &Rc<str>, dims: Vec<usize>) -> Result<()> {
        if self.contains(name) {
            return Err(error!(RedimensionedArray; name.to_string()));
        }
        if dims.is_empty() || dims.len() > MAX_RANK {
            return Err(error!(SubscriptOutOfRange; "ARRAYS HAVE 1 TO 3 DIMENSIONS"));
        }
        if dims.iter().any(|d| *d == 0) {
            return Err(error!(IllegalFunctionCall; "ARRAY SIZE MUST BE POSITIVE"));
        }
        let len = dims
            .iter()
            .try_fold(1usize, |acc, d| acc.checked_mul(d + 1))
            .filter(|len| *len <= MAX_ELEMENTS)
            .ok_or_else(|| error!(OutOfMemory; "ARRAY TOO LARGE"))?;
        self.dims.insert(name.clone(), dims);
        self.data.insert(name.clone(), vec![0.0; len]);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) {
        self.dims.remove(name);
        self.data.remove(name);
    }

    /// Zeroes every element, keeping the declared size.
    pub fn erase(&mut self, name: &str) -> Result<()> {
        match self.data.get_mut(name) {
            Some(data) => {
                data.iter_mut().for_each(|v| *v = 0.0);
                Ok(())
            }
            None => Err(error!(TypeMismatch; format!("{} IS NOT AN ARRAY", name))),
        }
    }

    pub fn fetch(&self, name: &str, index: &[i64]) -> Result<f64> {
        let offset = self.offset(name, index)?;
        match self.data.get(name).and_then(|data| data.get(offset)) {
            Some(value) => Ok(*value),
            None => Err(error!(SubscriptOutOfRange)),
        }
    }

    pub fn store(&mut self, name: &str, index: &[i64], value: f64) -> Result<()> {
        let offset = self.offset(name, index)?;
        match self.data.get_mut(name).and_then(|data| data.get_mut(offset)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(error!(SubscriptOutOfRange)),
        }
    }

    fn insert(&mut self, name: Rc<str>, dims: Vec<usize>) {
        let len: usize = dims.iter().map(|d| d + 1).product();
        self.data.insert(name.clone(), vec![0.0; len]);
        self.dims.insert(name, dims);
    }

    fn offset(&self, name: &str, index: &[i64]) -> Result<usize> {
        let dims = match self.dims.get(name) {
            Some(dims) => dims,
            None => return Err(error!(SubscriptOutOfRange; format!("{} IS NOT AN ARRAY", name))),
        };
        if dims.len() != index.len() {
            return Err(error!(SubscriptOutOfRange; "WRONG NUMBER OF SUBSCRIPTS"));
        }
        let mut offset = 0usize;
        for (i, d) in index.iter().zip(dims) {
            if *i < self.base || *i > *d as i64 {
                return Err(error!(SubscriptOutOfRange));
            }
            offset = offset * (d + 1) + *i as usize;
        }
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_array() {
        let mut a = Arrays::new();
        assert_eq!(a.rank("@"), Some(1));
        a.store("@", &[100], 5.0).unwrap();
        assert_eq!(a.fetch("@", &[100]).unwrap(), 5.0);
        assert!(a.fetch("@", &[101]).is_err());
    }

    #[test]
    fn test_base_moves_lowest_subscript() {
        let mut a = Arrays::new();
        a.set_base(1);
        a.dimension(&"A".into(), vec![3]).unwrap();
        assert!(a.fetch("A", &[0]).is_err());
        a.store("A", &[3], 1.5).unwrap();
        assert_eq!(a.fetch("A", &[3]).unwrap(), 1.5);
    }

    #[test]
    fn test_three_dimensions() {
        let mut a = Arrays::new();
        a.dimension(&"B".into(), vec![2, 3, 4]).unwrap();
        a.store("B", &[2, 3, 4], 9.0).unwrap();
        a.store("B", &[1, 0, 0], 1.0).unwrap();
        assert_eq!(a.fetch("B", &[2, 3, 4]).unwrap(), 9.0);
        assert_eq!(a.fetch("B", &[1, 0, 0]).unwrap(), 1.0);
        assert_eq!(a.fetch("B", &[0, 0, 0]).unwrap(), 0.0);
        assert!(a.fetch("B", &[1, 1]).is_err());
    }

    #[test]
    fn test_redimension_and_erase() {
        let mut a = Arrays::new();
        a.dimension(&"C".into(), vec![2]).unwrap();
        assert_eq!(
            a.dimension(&"C".into(), vec![2]).unwrap_err().to_string(),
            "REDIMENSIONED ARRAY; C"
        );
        a.store("C", &[1], 4.0).unwrap();
        a.erase("C").unwrap();
        assert_eq!(a.fetch("C", &[1]).unwrap(), 0.0);
        assert!(a.erase("Z").is_err());
    }
}
