//! Route table of the console.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Page {
    #[strum(to_string = "Clientes")]
    Clientes,
    #[strum(to_string = "Cidades")]
    Cidades,
    #[strum(to_string = "Estado")]
    Estados,
    #[strum(to_string = "Pessoa Física")]
    PessoasFisicas,
    #[strum(to_string = "Pessoa Jurídica")]
    PessoasJuridicas,
    #[strum(to_string = "Frete")]
    Fretes,
    #[strum(to_string = "Funcionários")]
    Funcionarios,
    #[strum(to_string = "Dashboard")]
    Dashboard,
    #[strum(to_string = "Gerenciamento")]
    Gerenciamento,
    #[strum(to_string = "Entrar")]
    SignIn,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Clientes => "/material/customers",
            Page::Cidades => "/material/city",
            Page::Estados => "/material/state",
            Page::PessoasFisicas => "/material/progress",
            Page::PessoasJuridicas => "/material/pj",
            Page::Fretes => "/material/frete",
            Page::Funcionarios => "/material/employee",
            Page::Dashboard => "/material/table",
            Page::Gerenciamento => "/material/gerenciamento",
            Page::SignIn => "/session/signin",
        }
    }

    /// Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.trim_end_matches('/');
        Page::iter().find(|page| page.path() == path)
    }

    pub fn icon_text(self) -> &'static str {
        match self {
            Page::Clientes | Page::Cidades => "C",
            Page::Estados => "E",
            Page::PessoasFisicas => "PF",
            Page::PessoasJuridicas => "PJ",
            Page::Fretes | Page::Funcionarios => "F",
            Page::Dashboard => "D",
            Page::Gerenciamento => "G",
            Page::SignIn => "",
        }
    }

    /// Pages listed in the sidebar, in menu order.
    pub fn sidebar() -> Vec<Page> {
        Page::iter().filter(|page| *page != Page::SignIn).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_resolves_back() {
        for page in Page::iter() {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/material/table/"), Some(Page::Dashboard));
        assert_eq!(Page::from_path("/material/form"), None);
    }

    #[test]
    fn test_sidebar_excludes_sign_in() {
        let sidebar = Page::sidebar();
        assert_eq!(sidebar.len(), 9);
        assert_eq!(sidebar[0], Page::Clientes);
        assert!(!sidebar.contains(&Page::SignIn));
        assert_eq!(Page::PessoasFisicas.to_string(), "Pessoa Física");
        assert_eq!(Page::PessoasFisicas.icon_text(), "PF");
    }
}
