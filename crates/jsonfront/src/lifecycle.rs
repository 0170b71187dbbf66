//! Teardown of value trees.
//!
//! Containers release their subtrees with an explicit work stack instead of
//! recursing, so neither nesting depth nor member-chain length is bounded by
//! the native call stack. A partially built container dropped on a failed
//! parse goes through the same path as a finished tree.

use alloc::{boxed::Box, vec::Vec};
use core::mem;

use crate::value::{Array, Member, Object, Value};

/// Releases `value` and everything it owns.
///
/// This is what dropping the value does; the function exists to make the
/// hand-back explicit at call sites. Ownership guarantees a value is released
/// at most once.
pub fn release(value: Value) {
    drop(value);
}

impl Drop for Array {
    fn drop(&mut self) {
        if self.elements.iter().any(Value::is_container) {
            teardown(mem::take(&mut self.elements));
        }
    }
}

impl Drop for Object {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        unlink(self.head.take(), &mut pending);
        teardown(pending);
    }
}

/// Frees a member chain front to back, moving nested containers to `pending`.
fn unlink(mut next: Option<Box<Member>>, pending: &mut Vec<Value>) {
    while let Some(mut member) = next {
        next = member.next.take();
        if member.value.is_container() {
            pending.push(mem::take(&mut member.value));
        }
    }
}

/// Empties every container on the stack before letting it drop, so each
/// individual drop is shallow.
fn teardown(mut pending: Vec<Value>) {
    while let Some(mut value) = pending.pop() {
        match &mut value {
            Value::Array(array) => pending.append(&mut array.elements),
            Value::Object(object) => unlink(object.head.take(), &mut pending),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn nested_arrays(depth: usize) -> Value {
        let mut value = Value::Null;
        for _ in 0..depth {
            value = Value::from(vec![value]);
        }
        value
    }

    #[test]
    fn deep_nesting_drops_without_recursion() {
        release(nested_arrays(1_000_000));
    }

    #[test]
    fn long_member_chain_drops_without_recursion() {
        let object: Object = (0..1_000_000_i64).map(|i| ("k", i)).collect();
        assert_eq!(object.len(), 1_000_000);
        release(Value::Object(object));
    }

    #[test]
    fn deeply_nested_objects_drop() {
        let mut value = Value::Null;
        for _ in 0..100_000 {
            value = Value::Object([("inner", value)].into_iter().collect());
        }
        drop(value);
    }
}
