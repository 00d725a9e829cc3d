//! 西班牙语翻译 (es-ES)

use super::keys::{
    CommonTexts, FormTexts, HelpTexts, HintTexts, HomeTexts, ModalTexts, NavTexts, ProjectsTexts,
    Translations, UrlGrpsTexts, UrlsTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Portfolio Admin",
        loading: "Cargando...",
        error: "Error",
        yes: "Sí",
        no: "No",
        cancel: "Cancelar",
        delete: "Eliminar",
        save: "Guardar",
    },

    hints: HintTexts {
        switch_panel: "Cambiar panel",
        navigate: "Navegar",
        select: "Seleccionar",
        open: "Abrir",
        add: "Nuevo",
        edit: "Editar",
        delete: "Eliminar",
        reload: "Recargar",
        filter: "Filtrar",
        back: "Volver",
        quit: "Salir",
        next_field: "Campo",
        toggle: "Activar",
        change_group: "Grupo",
        submit: "Guardar",
        close: "Cerrar",
        help: "Ayuda",
    },

    nav: NavTexts {
        title: "Menú",
        home: "Inicio",
        url_grps: "Grupos",
        urls: "Urls",
        projects: "Proyectos",
    },

    home: HomeTexts {
        welcome: "Bienvenido a Portfolio Admin",
        welcome_desc: "Administra los grupos de enlaces y las urls del portafolio",
        api_url: "API",
        get_started: "Elige una sección en el menú de la izquierda y pulsa Enter",
    },

    url_grps: UrlGrpsTexts {
        title: "Grupos de Urls",
        empty: "No hay grupos registrados",
        col_id: "Id",
        col_name: "Nombre",
        col_status: "Estado",
    },

    urls: UrlsTexts {
        title: "Urls",
        empty: "No hay urls registradas",
        col_name: "Nombre",
        col_link: "Enlace",
        col_group: "Grupo",
        col_status: "Estado",
        filter: "Filtro",
        all_groups: "Todos los grupos",
        unknown_group: "(sin grupo)",
    },

    projects: ProjectsTexts {
        title: "Proyectos públicos",
        empty: "No hay proyectos públicos",
        count: "proyectos",
    },

    form: FormTexts {
        new_group: "Nuevo grupo",
        edit_group: "Editar grupo",
        new_url: "Nueva url",
        edit_url: "Editar url",
        name: "Nombre",
        link: "Enlace",
        group: "Grupo",
        enabled: "Habilitado",
        select_group: "Seleccione un grupo",
        loading_groups: "Cargando grupos...",
        submitting: "Guardando...",
        redirecting: "Volviendo al listado...",
    },

    modal: ModalTexts {
        confirm_delete_title: "Confirmar eliminación",
        confirm_delete_group: "¿Eliminar el grupo?",
        confirm_delete_url: "¿Eliminar la url?",
        notification_error: "Error",
        notification_success: "Éxito",
        press_to_close: "Pulsa Enter o Esc para cerrar",
    },

    help: HelpTexts {
        title: "Ayuda",
        lines: &[
            ("Tab", "Cambiar entre menú y contenido"),
            ("↑↓ / j k", "Mover la selección"),
            ("Enter", "Abrir / confirmar"),
            ("Alt+a", "Crear"),
            ("Alt+e", "Editar"),
            ("Alt+d", "Eliminar"),
            ("Alt+r", "Recargar"),
            ("Alt+f", "Filtrar urls por grupo"),
            ("Esc", "Volver / cerrar"),
            ("Alt+q / Ctrl+c", "Salir"),
        ],
    },
};
