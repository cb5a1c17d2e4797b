use recomendador_equipo::api_json::*;
use recomendador_equipo::RecomendadorError;
use recomendador_equipo::algorithm::{estadisticas_tareas, EstadisticasTareas};
use recomendador_equipo::models::EstadoTarea;
use chrono::{TimeZone, Utc};
use std::io::Write;
use tempfile::NamedTempFile;

const ROSTER: &str = r#"
[
    {"id": "1", "name": "Ana Martínez", "role": "Desarrolladora Frontend",
     "technologies": ["React", "TypeScript", "Tailwind CSS", "Redux", "React Native"],
     "availability": 70, "currentProjects": 2},
    {"id": "2", "name": "Carlos Ruiz", "role": "Desarrollador Backend",
     "technologies": ["Node.js", "Express", "MongoDB", "Python", "Django"],
     "availability": 50, "currentProjects": 3},
    {"id": "7", "name": "Sofía Navarro", "role": "Desarrolladora Backend",
     "technologies": ["PHP", "Laravel", "MySQL", "Redis"],
     "availability": 90, "currentProjects": 1}
]
"#;

fn archivo(contenido: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("create tmp file");
    f.write_all(contenido.as_bytes()).expect("write tmp file");
    f
}

#[test]
fn test_usa_roster_cuando_la_solicitud_no_trae_candidatos() {
    let roster = archivo(ROSTER);
    let sol = parse_json_input(r#"{"requisitos": {"backend": ["Node.js"], "database": ["MySQL"]}}"#).unwrap();

    let (req, candidatos) = resolver_candidatos(sol, Some(roster.path())).expect("resolver candidatos");
    assert_eq!(candidatos.len(), 3);

    let res = recomendador_equipo::recomendar(&req, &candidatos);
    let ids: Vec<&str> = res.iter().map(|r| r.id()).collect();
    // Sofía: 10 + 9 - 5 = 14; Carlos: 10 + 5 - 15 = 0
    assert_eq!(ids, vec!["7", "2"]);
}

#[test]
fn test_candidatos_de_la_solicitud_tienen_prioridad() {
    let roster = archivo(ROSTER);
    let sol = parse_json_input(
        r#"{"requisitos": {"frontend": ["Vue.js"]},
            "candidatos": [{"id": "x", "name": "X", "technologies": ["Vue.js"], "availability": 10, "currentProjects": 0}]}"#,
    )
    .unwrap();
    let (_, candidatos) = resolver_candidatos(sol, Some(roster.path())).unwrap();
    assert_eq!(candidatos.len(), 1);
    assert_eq!(candidatos[0].id, "x");
}

#[test]
fn test_cargar_solicitud_desde_fichero() {
    let f = archivo(r#"{"requisitos": {"frontend": ["React"]}, "candidatos": []}"#);
    let sol = cargar_solicitud(f.path()).expect("cargar solicitud");
    assert_eq!(sol.requisitos.total(), 1);
    assert_eq!(sol.candidatos.map(|c| c.len()), Some(0));
}

#[test]
fn test_fichero_inexistente() {
    let err = cargar_candidatos("/no/existe/roster.json").unwrap_err();
    assert!(matches!(err, RecomendadorError::Io { .. }));
}

#[test]
fn test_json_invalido() {
    let f = archivo("{ no es json");
    let err = cargar_solicitud(f.path()).unwrap_err();
    assert!(matches!(err, RecomendadorError::Json(_)));
}

#[test]
fn test_cargar_tareas() {
    let f = archivo(
        r#"[
            {"id": 1, "title": "Login", "status": "in_progress", "estimated_hours": 10, "actual_hours": 5,
             "due_date": "2024-01-10T00:00:00Z"},
            {"id": 2, "title": "Deploy", "status": "completed"}
        ]"#,
    );
    let tareas = cargar_tareas(f.path()).expect("cargar tareas");
    assert_eq!(tareas.len(), 2);
    assert_eq!(tareas[0].horas_estimadas, Some(10.0));
    assert!(tareas[1].fecha_limite.is_none());
}

#[test]
fn test_cargar_tareas_en_revision() {
    let f = archivo(
        r#"[
            {"id": 1, "title": "Revisar PR", "status": "review", "due_date": "2024-03-01T00:00:00Z"},
            {"id": 2, "title": "Login", "status": "pending"}
        ]"#,
    );
    let tareas = cargar_tareas(f.path()).expect("el estado review debe aceptarse");
    assert_eq!(tareas[0].estado, EstadoTarea::Review);

    let ahora = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
    let stats = estadisticas_tareas(&tareas, ahora);
    assert_eq!(
        stats,
        EstadisticasTareas { total: 2, pending: 1, in_progress: 0, completed: 0, overdue: 1 }
    );
}
