use subreg_domain::declaration::SubdomainDeclaration;

/// Accepted declarations of a single run, in registration order.
///
/// The registry only grows through [`crate::Registrar::add_subdomain`], so every entry is
/// normalized. Construct one per run and hand it to [`crate::compile`] once registration
/// is done.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    declarations: Vec<SubdomainDeclaration>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, declaration: SubdomainDeclaration) -> &SubdomainDeclaration {
        self.declarations.push(declaration);
        &self.declarations[self.declarations.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubdomainDeclaration> {
        self.declarations.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SubdomainDeclaration] {
        &self.declarations
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a SubdomainDeclaration;
    type IntoIter = std::slice::Iter<'a, SubdomainDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
