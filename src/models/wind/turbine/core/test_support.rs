use std::{
    cell::RefCell,
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use uom::si::{
    angle::degree,
    f64::{Angle, Length, MassDensity, Pressure, Ratio},
    length::millimeter,
    mass_density::kilogram_per_cubic_meter,
    pressure::gigapascal,
    ratio::ratio,
};

use super::{
    DescriptorReader, FileFormatError, LayerSpec, LayupDescriptor, Material, MaterialLibrary,
    WebLocation, decode_webs,
    reference::{WEB_1, WEB_2, WEB_3},
};

/// A material with placeholder glass-fiber properties.
pub(crate) fn material(name: &str) -> Material {
    Material {
        name: name.to_owned(),
        e1: Pressure::new::<gigapascal>(27.7),
        e2: Pressure::new::<gigapascal>(13.65),
        g12: Pressure::new::<gigapascal>(7.2),
        nu12: Ratio::new::<ratio>(0.39),
        density: MassDensity::new::<kilogram_per_cubic_meter>(1850.0),
    }
}

pub(crate) fn reference_materials() -> Vec<Material> {
    ["gelcoat", "triax", "saertex", "foam", "carbon"]
        .into_iter()
        .map(material)
        .collect()
}

pub(crate) fn reference_library() -> MaterialLibrary {
    MaterialLibrary::new(reference_materials()).unwrap()
}

fn layer(material: &str, thickness_mm: f64, orientation_deg: f64) -> LayerSpec {
    LayerSpec {
        material: material.to_owned(),
        thickness: Length::new::<millimeter>(thickness_mm),
        orientation: Angle::new::<degree>(orientation_deg),
    }
}

/// Serves deterministic descriptors for any number of structural stations.
///
/// Stations are recovered from the one-based descriptor file names, and every
/// requested path is recorded in order.
pub(crate) struct InMemoryReader {
    web_counts: Vec<usize>,
    web_material: Option<(usize, String)>,
    shapes: BTreeMap<usize, Vec<[f64; 2]>>,
    unreadable_layup: Option<usize>,
    requested: RefCell<Vec<PathBuf>>,
}

impl InMemoryReader {
    /// Creates a reader whose layups match the given decoded webs.
    pub(crate) fn new(webs: &[Vec<WebLocation>]) -> Self {
        Self {
            web_counts: webs.iter().map(Vec::len).collect(),
            web_material: None,
            shapes: BTreeMap::new(),
            unreadable_layup: None,
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Creates a reader matching the reference turbine's web layout.
    pub(crate) fn reference() -> Self {
        let webs = decode_webs(WEB_1.len(), &[&WEB_1, &WEB_2, &WEB_3]).unwrap();
        Self::new(&webs)
    }

    /// Makes the first web stack at `station` reference `name`.
    pub(crate) fn with_web_material(mut self, station: usize, name: &str) -> Self {
        self.web_material = Some((station, name.to_owned()));
        self
    }

    /// Replaces the profile coordinates served for `station`.
    pub(crate) fn with_shape(mut self, station: usize, coordinates: Vec<[f64; 2]>) -> Self {
        self.shapes.insert(station, coordinates);
        self
    }

    /// Makes the layup descriptor for `station` unreadable.
    pub(crate) fn with_unreadable_layup(mut self, station: usize) -> Self {
        self.unreadable_layup = Some(station);
        self
    }

    /// Returns every descriptor path requested so far.
    pub(crate) fn requested(&self) -> Vec<PathBuf> {
        self.requested.borrow().clone()
    }

    fn station(&self, path: &Path, prefix: &str) -> Result<usize, FileFormatError> {
        self.requested.borrow_mut().push(path.to_path_buf());

        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.strip_prefix(prefix))
            .and_then(|number| number.parse::<usize>().ok())
            .and_then(|number| number.checked_sub(1))
            .filter(|&station| station < self.web_counts.len())
            .ok_or_else(|| FileFormatError::new(path, "no such station"))
    }
}

impl DescriptorReader for InMemoryReader {
    fn materials(&self, path: &Path) -> Result<Vec<Material>, FileFormatError> {
        self.requested.borrow_mut().push(path.to_path_buf());
        Ok(reference_materials())
    }

    fn layup(&self, path: &Path) -> Result<LayupDescriptor, FileFormatError> {
        let station = self.station(path, "layup_")?;

        if self.unreadable_layup == Some(station) {
            return Err(FileFormatError::new(path, "truncated layer table"));
        }

        let skin = vec![
            layer("gelcoat", 0.381, 0.0),
            layer("triax", 0.51, 0.0),
            layer("carbon", 2.0, 0.0),
        ];

        let mut webs: Vec<_> = (0..self.web_counts[station])
            .map(|_| vec![layer("saertex", 1.0, 45.0), layer("foam", 8.0, 0.0)])
            .collect();

        if let Some((target, name)) = &self.web_material {
            if *target == station {
                if let Some(stack) = webs.first_mut() {
                    stack[0].material.clone_from(name);
                }
            }
        }

        Ok(LayupDescriptor {
            upper: skin.clone(),
            lower: skin,
            webs,
        })
    }

    fn shape(&self, path: &Path) -> Result<Vec<[f64; 2]>, FileFormatError> {
        let station = self.station(path, "shape_")?;

        Ok(self.shapes.get(&station).cloned().unwrap_or_else(|| {
            vec![[1.0, 0.0], [0.5, 0.06], [0.0, 0.0], [0.5, -0.06], [1.0, 0.0]]
        }))
    }
}
