//! Column name constants for the particle table.
//!
//! Using these constants instead of string literals keeps consumers in sync
//! with the declared schema. Names match the instrument export verbatim.

// =============================================================================
// Identity and bookkeeping
// =============================================================================

/// Particle name assigned by the instrument software
pub const NAME: &str = "Name";
/// Unique particle identifier within the run
pub const ID: &str = "Id";
/// Group identifier linking particles segmented from the same event
pub const GROUP_ID: &str = "GroupId";
/// Globally unique identifier for the particle record
pub const UUID: &str = "Uuid";
/// Calibration image number used for this particle
pub const CAL_IMAGE: &str = "CalImage";
/// Calibration constant (microns per pixel)
pub const CAL_CONST: &str = "CalConst";
/// Elapsed run time at capture, in seconds
pub const ELAPSED_TIME: &str = "ElapsedTime";
/// Particles per chamber estimate
pub const PPC: &str = "Ppc";

// =============================================================================
// Acquisition clock
// =============================================================================

/// Acquisition date
pub const DATE: &str = "Date";
/// Acquisition time of day
pub const TIME: &str = "Time";
/// Combined acquisition timestamp
pub const TIMESTAMP: &str = "Timestamp";

// =============================================================================
// Size and shape morphology
// =============================================================================

/// Area based diameter (ABD) cross-sectional area, in square microns
pub const ABD_AREA: &str = "AbdArea";
/// Area with interior holes filled
pub const FILLED_AREA: &str = "FilledArea";
/// Ratio of minor to major axis of the best-fit ellipse
pub const ASPECT_RATIO: &str = "AspectRatio";
/// Diameter derived from the ABD area
pub const ABD_DIAMETER: &str = "AbdDiameter";
/// Equivalent spherical diameter (ESD)
pub const ESD_DIAMETER: &str = "EsdDiameter";
/// Feret diameter
pub const FD_DIAMETER: &str = "FdDiameter";
/// Length of the particle along its major axis
pub const LENGTH: &str = "Length";
/// Width of the particle along its minor axis
pub const WIDTH: &str = "Width";
/// Perimeter of the particle outline
pub const PERIMETER: &str = "Perimeter";
/// Perimeter of the convex hull
pub const CONVEX_PERIMETER: &str = "ConvexPerimeter";
/// Ratio of convex hull perimeter to actual perimeter
pub const CONVEXITY: &str = "Convexity";
/// Goodness of fit to a circle
pub const CIRCLE_FIT: &str = "CircleFit";
/// Circularity (4 pi area over perimeter squared)
pub const CIRCULARITY: &str = "Circularity";
/// Circularity computed from Hu moments
pub const CIRCULARITY_HU: &str = "CircularityHu";
/// Compactness of the particle outline
pub const COMPACTNESS: &str = "Compactness";
/// Strength of the intensity gradient at the particle edge
pub const EDGE_GRADIENT: &str = "EdgeGradient";
/// Elongation of the particle
pub const ELONGATION: &str = "Elongation";
/// Angle of the maximum Feret diameter, in degrees
pub const FERET_MAX_ANGLE: &str = "FeretMaxAngle";
/// Angle of the minimum Feret diameter, in degrees
pub const FERET_MIN_ANGLE: &str = "FeretMinAngle";
/// Fiber curl (geodesic length over Feret length)
pub const FIBER_CURL: &str = "FiberCurl";
/// Fiber straightness
pub const FIBER_STRAIGHTNESS: &str = "FiberStraightness";
/// Aspect ratio along the geodesic skeleton
pub const GEODESIC_ASPECT_RATIO: &str = "GeodesicAspectRatio";
/// Length along the geodesic skeleton
pub const GEODESIC_LENGTH: &str = "GeodesicLength";
/// Thickness along the geodesic skeleton
pub const GEODESIC_THICKNESS: &str = "GeodesicThickness";
/// Surface roughness of the outline
pub const ROUGHNESS: &str = "Roughness";
/// Bilateral symmetry score
pub const SYMMETRY: &str = "Symmetry";

// =============================================================================
// Intensity and color
// =============================================================================

/// Mean grayscale intensity
pub const INTENSITY: &str = "Intensity";
/// Standard deviation of grayscale intensity
pub const SIGMA_INTENSITY: &str = "SigmaIntensity";
/// Summed grayscale intensity over the particle
pub const SUM_INTENSITY: &str = "SumIntensity";
/// Fraction of transparent pixels
pub const TRANSPARENCY: &str = "Transparency";
/// Mean blue channel value
pub const AVG_BLUE: &str = "AvgBlue";
/// Mean green channel value
pub const AVG_GREEN: &str = "AvgGreen";
/// Mean red channel value
pub const AVG_RED: &str = "AvgRed";
/// Ratio of blue to green channel means
pub const RATIO_BLUE_GREEN: &str = "RatioBlueGreen";
/// Ratio of red to blue channel means
pub const RATIO_RED_BLUE: &str = "RatioRedBlue";
/// Ratio of red to green channel means
pub const RATIO_RED_GREEN: &str = "RatioRedGreen";

// =============================================================================
// Fluorescence trigger channels
// =============================================================================

/// Channel 1 pulse area
pub const CH1_AREA: &str = "Ch1Area";
/// Channel 1 pulse peak height
pub const CH1_PEAK: &str = "Ch1Peak";
/// Channel 1 pulse width
pub const CH1_WIDTH: &str = "Ch1Width";
/// Channel 2 pulse area
pub const CH2_AREA: &str = "Ch2Area";
/// Channel 2 pulse peak height
pub const CH2_PEAK: &str = "Ch2Peak";
/// Channel 2 pulse width
pub const CH2_WIDTH: &str = "Ch2Width";
/// Ratio of channel 2 to channel 1 pulse peaks
pub const CH2_CH1_RATIO: &str = "Ch2Ch1Ratio";

// =============================================================================
// Volume and biovolume estimates
// =============================================================================

/// Volume assuming a cylindrical particle
pub const BIOVOLUME_CYLINDER: &str = "BiovolumeCylinder";
/// Volume assuming a prolate spheroid
pub const BIOVOLUME_P_SPHEROID: &str = "BiovolumePSpheroid";
/// Volume assuming a sphere
pub const BIOVOLUME_SPHERE: &str = "BiovolumeSphere";
/// Biovolume via the Sosik & Olson method
pub const BIOVOLUME_H_SOSIK: &str = "BiovolumeHSosik";
/// Surface area via the Sosik & Olson method
pub const SURFACE_AREA_H_SOSIK: &str = "SurfaceAreaHSosik";
/// Volume derived from the ABD area
pub const ABD_VOLUME: &str = "AbdVolume";
/// Volume derived from the ESD diameter
pub const ESD_VOLUME: &str = "EsdVolume";
/// Volume of detected sphere structures
pub const SPHERE_VOLUME: &str = "SphereVolume";
/// Count of detected sphere structures
pub const SPHERE_COUNT: &str = "SphereCount";
/// Count of sphere complement structures
pub const SPHERE_COMPLEMENT: &str = "SphereComplement";
/// Count of unresolved sphere candidates
pub const SPHERE_UNKNOWN: &str = "SphereUnknown";

// =============================================================================
// Collage image placement
// =============================================================================

/// Collage file the particle image is stored in
pub const COLLAGE_FILE: &str = "CollageFile";
/// Filename of the particle image
pub const IMAGE_FILENAME: &str = "ImageFilename";
/// X position of the particle image within the collage, in pixels
pub const IMAGE_X: &str = "ImageX";
/// Y position of the particle image within the collage, in pixels
pub const IMAGE_Y: &str = "ImageY";
/// Height of the particle image, in pixels
pub const IMAGE_H: &str = "ImageH";
/// Width of the particle image, in pixels
pub const IMAGE_W: &str = "ImageW";
/// Raw camera frame the particle was segmented from
pub const SRC_IMAGE: &str = "SrcImage";
/// X position within the raw camera frame, in pixels
pub const SRC_X: &str = "SrcX";
/// Y position within the raw camera frame, in pixels
pub const SRC_Y: &str = "SrcY";

// =============================================================================
// Classification
// =============================================================================

/// Score assigned by the acquisition filter
pub const FILTER_SCORE: &str = "FilterScore";
/// Preprocessing applied before prediction
pub const PREPROCESSING: &str = "Preprocessing";
/// Preprocessing applied before manual annotation
pub const PREPROCESSING_TRUE: &str = "PreprocessingTrue";
/// Classifier confidence for the predicted label
pub const PROBABILITY_SCORE: &str = "ProbabilityScore";
/// Label predicted by the classifier
pub const LABEL_PREDICTED: &str = "LabelPredicted";
/// Label assigned by a human annotator
pub const LABEL_TRUE: &str = "LabelTrue";
