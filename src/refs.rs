use pdf_writer::Ref;

/// Hands out consecutive object ids while a document is being written
pub struct ObjectReferences {
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences { next_id: 1 }
    }

    pub fn gen(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_start_at_one() {
        let mut refs = ObjectReferences::new();
        let catalog = refs.gen();
        let page = refs.gen();
        assert_eq!(catalog, Ref::new(1));
        assert_eq!(page, Ref::new(2));
    }
}
